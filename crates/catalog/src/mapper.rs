//! Turns an indexed feed into parent products with their resolved options.

use crate::error::CatalogError;
use crate::fields::FieldReader;
use crate::index::CatalogIndex;
use crate::policy::Strictness;
use admonis_types::{Product, ProductOption};
use roxmltree::Node;

/// Fallback for `optionSugName1` ("color").
pub const DEFAULT_SUG_NAME_1: &str = "צבע";
/// Fallback for `optionSugName1Title` ("choose color").
pub const DEFAULT_SUG_NAME_1_TITLE: &str = "בחר צבע";
/// Fallback for `optionSugName2Title` ("choose size").
pub const DEFAULT_SUG_NAME_2_TITLE: &str = "בחר מידה";

pub const VIDEO_ATTRIBUTE: &str = "f54ProductVideo";
pub const COLOR_ATTRIBUTE: &str = "f54ProductColor";
pub const SIZE_ATTRIBUTE: &str = "f54ProductSize";

/// A variant id listed by a parent that has no matching `product` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedVariant {
    pub product_id: String,
    pub variant_id: String,
}

/// Options of one parent, plus the variant ids that could not be resolved.
#[derive(Debug, Default)]
pub struct ResolvedOptions {
    pub options: Vec<ProductOption>,
    pub unresolved: Vec<UnresolvedVariant>,
}

/// Result of mapping a whole catalog.
#[derive(Debug, Default)]
pub struct MappingReport {
    pub products: Vec<Product>,
    pub unresolved: Vec<UnresolvedVariant>,
}

/// Maps the elements of a [`CatalogIndex`] into [`Product`] records.
pub struct ProductMapper<'a, 'input> {
    index: &'a CatalogIndex<'a, 'input>,
    strictness: Strictness,
}

impl<'a, 'input> ProductMapper<'a, 'input> {
    pub fn new(index: &'a CatalogIndex<'a, 'input>) -> Self {
        Self { index, strictness: Strictness::default() }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Maps every parent product and collects unresolved variant diagnostics.
    pub fn map(&self) -> Result<MappingReport, CatalogError> {
        let parents: Vec<_> = self.index.iter().filter(|(_, node)| self.is_parent(*node)).collect();
        log::info!("Found {} total Admonis products", parents.len());

        let mut report = MappingReport::default();
        for (product_id, element) in parents {
            let mut product = self.map_product(product_id, element)?;
            let resolved = self.get_options(product_id, element, &product)?;
            product.options = resolved.options;
            report.unresolved.extend(resolved.unresolved);
            report.products.push(product);
        }
        Ok(report)
    }

    /// Maps every parent product, dropping diagnostics.
    pub fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.map().map(|report| report.products)
    }

    /// A product is a parent iff it has a direct `variations` child.
    pub fn is_parent(&self, element: Node<'_, '_>) -> bool {
        self.index.namespace().child(element, "variations").is_some()
    }

    /// Maps the scalar fields of a parent. `options` is left empty.
    pub fn map_product(
        &self,
        product_id: &'a str,
        element: Node<'a, 'input>,
    ) -> Result<Product, CatalogError> {
        let fields = FieldReader::new(element, self.index.namespace(), product_id);
        Ok(Product {
            customer_id: fields.number("customer-id")?,
            name: fields.text("display-name"),
            upc: fields.text("upc"),
            status_id: fields.text("status-id"),
            status_comments: fields.text("status-comments"),
            package: fields.text("package"),
            description: fields.text("short-description"),
            description_long: fields.text("long-description"),
            warranty_period: fields.text("warranty-period"),
            warranty_by: fields.text("warranty-by"),
            makat: fields.text("makat"),
            model: fields.text("model"),
            price_cost_customer: fields.number("price-cost-customer")?,
            price_cost: fields.number("price-cost")?,
            price_market: fields.number("price-market")?,
            price_publish: fields.number("price-publish")?,
            brand: fields.text("brand"),
            volume: fields.text("volume"),
            classification_id: fields.text("classification-id"),
            sub_class: fields.text("subclass"),
            platform_category_id: fields.text("platform-category-id"),
            volume_type: fields.text("volume-type"),
            video_link: fields.custom_attribute(VIDEO_ATTRIBUTE),
            storage_location: fields.text("storage-location"),
            options: Vec::new(),
        })
    }

    /// Non-empty `product-id`s of every `variant` under `element`, in document
    /// order with duplicates kept.
    pub fn variant_ids(&self, element: Node<'a, 'input>) -> Vec<&'a str> {
        self.index
            .namespace()
            .descendants(element, "variant")
            .filter_map(|variant| variant.attribute("product-id"))
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// Resolves the variants of `element` against the index and maps each one.
    pub fn get_options(
        &self,
        product_id: &str,
        element: Node<'a, 'input>,
        parent: &Product,
    ) -> Result<ResolvedOptions, CatalogError> {
        let mut resolved = ResolvedOptions::default();
        for variant_id in self.variant_ids(element) {
            let Some(option_element) = self.index.get(variant_id) else {
                if self.strictness == Strictness::Strict {
                    return Err(CatalogError::UnresolvedVariant {
                        product_id: product_id.to_string(),
                        variant_id: variant_id.to_string(),
                    });
                }
                log::warn!(
                    "Product '{}' lists variant '{}' which is not in the catalog; skipping",
                    product_id,
                    variant_id
                );
                resolved.unresolved.push(UnresolvedVariant {
                    product_id: product_id.to_string(),
                    variant_id: variant_id.to_string(),
                });
                continue;
            };
            resolved.options.push(self.map_option(variant_id, option_element, parent)?);
        }
        Ok(resolved)
    }

    pub fn map_option(
        &self,
        option_id: &'a str,
        element: Node<'a, 'input>,
        parent: &Product,
    ) -> Result<ProductOption, CatalogError> {
        let fields = FieldReader::new(element, self.index.namespace(), option_id);
        Ok(ProductOption {
            sug_name_1: fields.text_or("option-sug-name-1", DEFAULT_SUG_NAME_1),
            sug_name_1_title: fields.text_or("option-sug-name-1-title", DEFAULT_SUG_NAME_1_TITLE),
            product_makat: parent.makat.clone(),
            makat: fields.text("option-makat"),
            sug_name_2: fields.custom_attribute(COLOR_ATTRIBUTE),
            sug_name_2_title: fields.text_or("option-sug-name-2-title", DEFAULT_SUG_NAME_2_TITLE),
            name: fields.custom_attribute(SIZE_ATTRIBUTE),
            model: fields.text("model"),
            price_cost_customer: fields.number("price-cost-customer")?,
            price_cost: fields.number("price-cost")?,
            price_publish: fields.number("price-publish")?,
            price_market: fields.number("price-market")?,
            storage_location: fields.text("storage-location"),
            upc: fields.text("upc"),
        })
    }
}
