use crate::option::ProductOption;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A parent catalog entry together with its purchasable options.
///
/// Field names on the wire follow the Admonis import format, which mixes
/// PascalCase with underscores, so every field is renamed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "CustomerID")]
    pub customer_id: i32,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "UPC")]
    pub upc: Option<String>,
    #[serde(rename = "StatusID")]
    pub status_id: Option<String>,
    #[serde(rename = "StatusComments")]
    pub status_comments: Option<String>,
    #[serde(rename = "Package")]
    pub package: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "DescriptionLong")]
    pub description_long: Option<String>,
    #[serde(rename = "WarrantyPeriod")]
    pub warranty_period: Option<String>,
    #[serde(rename = "WarrantyBy")]
    pub warranty_by: Option<String>,
    /// Product code. Copied into every option as `ProductMakat`.
    #[serde(rename = "Makat")]
    pub makat: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "Price_Cost_Customer")]
    pub price_cost_customer: Decimal,
    #[serde(rename = "Price_Cost")]
    pub price_cost: Decimal,
    #[serde(rename = "Price_Market")]
    pub price_market: Decimal,
    #[serde(rename = "Price_Publish")]
    pub price_publish: Decimal,
    #[serde(rename = "Brand")]
    pub brand: Option<String>,
    #[serde(rename = "Volume")]
    pub volume: Option<String>,
    #[serde(rename = "ClassificationID")]
    pub classification_id: Option<String>,
    #[serde(rename = "SubClass")]
    pub sub_class: Option<String>,
    #[serde(rename = "PlatformCategoryID")]
    pub platform_category_id: Option<String>,
    #[serde(rename = "VolumeType")]
    pub volume_type: Option<String>,
    #[serde(rename = "VideoLink")]
    pub video_link: Option<String>,
    #[serde(rename = "StorageLocation")]
    pub storage_location: Option<String>,
    #[serde(rename = "Options", default)]
    pub options: Vec<ProductOption>,
}

impl Product {
    /// Total number of options across a slice of products.
    pub fn option_count(products: &[Product]) -> usize {
        products.iter().map(|p| p.options.len()).sum()
    }
}
