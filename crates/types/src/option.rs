use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable variant of a [`crate::Product`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    #[serde(rename = "optionSugName1")]
    pub sug_name_1: String,
    #[serde(rename = "optionSugName1Title")]
    pub sug_name_1_title: String,
    /// The parent's `Makat` at the time the option was built.
    #[serde(rename = "ProductMakat")]
    pub product_makat: Option<String>,
    #[serde(rename = "optionMakat")]
    pub makat: Option<String>,
    #[serde(rename = "optionSugName2")]
    pub sug_name_2: Option<String>,
    #[serde(rename = "optionSugName2Title")]
    pub sug_name_2_title: String,
    #[serde(rename = "optionName")]
    pub name: Option<String>,
    #[serde(rename = "optionModel")]
    pub model: Option<String>,
    #[serde(rename = "optionPrice_Cost_Customer")]
    pub price_cost_customer: Decimal,
    #[serde(rename = "optionPrice_Cost")]
    pub price_cost: Decimal,
    #[serde(rename = "optionPrice_Publish")]
    pub price_publish: Decimal,
    #[serde(rename = "optionPrice_Market")]
    pub price_market: Decimal,
    #[serde(rename = "optionstorageLocation")]
    pub storage_location: Option<String>,
    #[serde(rename = "optionupc")]
    pub upc: Option<String>,
}
