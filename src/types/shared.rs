//! Records shared across API areas.

use serde::{Deserialize, Serialize};

/// Timestamps are passed through as the ISO 8601 strings the API sends.
pub type Date = String;

/// One resolution of an uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Image fields the API fills either with a list of resolutions or with a
/// bare string (URL or id, depending on the endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagesOrString {
    Images(Vec<Image>),
    String(String),
}

impl ImagesOrString {
    /// The widest image available, if the field carries images at all.
    pub fn largest(&self) -> Option<&Image> {
        match self {
            ImagesOrString::Images(images) => images.iter().max_by_key(|image| image.width),
            ImagesOrString::String(_) => None,
        }
    }
}

/// External link attached to shows, episodes, posts, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub target: Option<String>,
    pub label: Option<String>,
}

/// How a broadcast airs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Live,
    Premiere,
    Rerun,
    #[serde(other)]
    Unknown,
}

/// Per-channel viewer numbers for external streams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamCountChannelInfo {
    pub name: String,
    pub url: String,
    pub count: u64,
}

/// Current viewer numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamCount {
    pub youtube: Option<u64>,
    pub twitch: Option<u64>,
    pub total: Option<u64>,
    pub external: Option<Vec<StreamCountChannelInfo>>,
}

/// What is on air right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfoShow {
    pub title: String,
    pub topic: String,
    pub game: String,
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub show_id: u64,
    pub time_start: Date,
    pub time_end: Date,
    pub progress: i64,
    pub viewers: StreamCount,
    pub links: Vec<Link>,
}

int_enum! {
    /// Kind of an authentication token.
    pub enum TokenType {
        Normal = 0,
        Refresh = 1,
    }
}

/// Authentication token as handed out by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenType,
    pub uid: u64,
    pub token: String,
    pub valid_until: Date,
}
