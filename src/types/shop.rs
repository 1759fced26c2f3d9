use super::shared::ImagesOrString;
use serde::{Deserialize, Serialize};

/// A product of the merchandise shop. Prices are strings as sent upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub vat: Option<String>,
    pub link: Option<String>,
    pub image: Option<ImagesOrString>,
    pub sort_prio: Option<i64>,
    pub ci_visible: Option<bool>,
    pub ci_description: Option<String>,
    pub page_visible: Option<bool>,
}
