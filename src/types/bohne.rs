use super::shared::{Image, ImagesOrString, Link};
use serde::{Deserialize, Serialize};

/// Whether a team member appears on air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BohneRole {
    Onair,
    Offair,
    External,
    #[serde(other)]
    Unknown,
}

/// Reduced information about a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BohnePortrait {
    pub mgmtid: u64,
    pub name: String,
    pub role: BohneRole,
    pub episode_count: u64,
    pub images: Vec<Image>,
}

/// Full profile of a team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bohne {
    pub mgmtid: Option<u64>,
    pub nickname: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    #[serde(rename = "contentMK")]
    pub content_mk: Option<String>,
    #[serde(rename = "contentHTML")]
    pub content_html: Option<String>,
    pub portrait_image: Option<ImagesOrString>,
    pub public: Option<bool>,
    pub listed: Option<bool>,
    #[serde(rename = "showreelURL")]
    pub showreel_url: Option<String>,
    pub links: Option<Vec<Link>>,
    pub role: Option<String>,
    pub episode_count: Option<u64>,
    pub sort_prio: Option<i64>,
    pub is_subscribed: Option<bool>,
    pub userid: Option<u64>,
}
