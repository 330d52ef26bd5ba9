use crate::document::{FeedDocument, Namespace};
use crate::error::CatalogError;
use crate::policy::Strictness;
use indexmap::IndexMap;
use roxmltree::Node;

/// Every `product` element of a feed, keyed by its `product-id`.
///
/// Built once and never mutated. Keys borrow from the document. Iteration
/// follows the position at which each id was first seen; when an id repeats,
/// the later element replaces the earlier one in place.
pub struct CatalogIndex<'a, 'input> {
    namespace: Namespace<'a>,
    products: IndexMap<&'a str, Node<'a, 'input>>,
    skipped: usize,
}

impl<'a, 'input> CatalogIndex<'a, 'input> {
    pub fn build(
        document: &'a FeedDocument<'input>,
        strictness: Strictness,
    ) -> Result<Self, CatalogError> {
        let namespace = document.namespace();
        let mut products = IndexMap::new();
        let mut skipped = 0;

        for product in namespace.descendants(document.root(), "product") {
            let Some(id) = product.attribute("product-id").filter(|id| !id.is_empty()) else {
                let position = document.text_pos_at(product.range().start);
                if strictness == Strictness::Strict {
                    return Err(CatalogError::MissingProductId { position });
                }
                log::warn!("Skipping product element at {} without a product-id", position);
                skipped += 1;
                continue;
            };
            if products.insert(id, product).is_some() {
                log::debug!("Duplicate product-id '{}', keeping the later element", id);
            }
        }

        log::info!("Indexed {} catalog products", products.len());
        Ok(Self { namespace, products, skipped })
    }

    pub fn get(&self, product_id: &str) -> Option<Node<'a, 'input>> {
        self.products.get(product_id).copied()
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.products.contains_key(product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of `product` elements left out because they had no usable id.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn namespace(&self) -> Namespace<'a> {
        self.namespace
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Node<'a, 'input>)> + '_ {
        self.products.iter().map(|(id, node)| (*id, *node))
    }
}
