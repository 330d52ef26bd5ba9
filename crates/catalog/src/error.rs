use thiserror::Error;

/// Errors raised while indexing or mapping a catalog feed.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("product element at {position} has no product-id")]
    MissingProductId { position: roxmltree::TextPos },

    #[error("variant '{variant_id}' of product '{product_id}' is not in the catalog")]
    UnresolvedVariant {
        product_id: String,
        variant_id: String,
    },

    #[error("product '{product_id}': <{field}> value '{value}' is not a valid number")]
    InvalidNumber {
        product_id: String,
        field: String,
        value: String,
    },
}
