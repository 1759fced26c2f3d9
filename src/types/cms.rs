use super::shared::{Date, ImagesOrString};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsPage {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "contentMK")]
    pub content_mk: Option<ImagesOrString>,
    #[serde(rename = "contentHTML")]
    pub content_html: Option<ImagesOrString>,
    pub is_public: Option<bool>,
    pub create_date: Option<Date>,
    pub last_change_date: Option<Date>,
}

/// A frontend path backed by a CMS page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsRoute {
    pub route: Option<String>,
    pub page: Option<String>,
    pub is_wildcard: Option<bool>,
    pub is_active: Option<bool>,
}
