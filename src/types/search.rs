use super::shared::{Date, Image};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultEpisode {
    pub id: u64,
    pub title: String,
    pub show_name: String,
    pub thumbnail: Vec<Image>,
    // Misspelled upstream
    #[serde(rename = "distibutionPublishingDate")]
    pub distribution_publishing_date: Option<Date>,
    pub first_broadcastdate: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultShow {
    pub id: u64,
    pub title: String,
    pub thumbnail: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultBlog {
    pub id: u64,
    pub title: String,
    pub thumbnail: Vec<Image>,
    pub publish_date: Date,
}

/// Hits of the full text search, grouped by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub shows: Vec<SearchResultShow>,
    #[serde(default)]
    pub episodes: Vec<SearchResultEpisode>,
    #[serde(default)]
    pub blog: Vec<SearchResultBlog>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty() && self.episodes.is_empty() && self.blog.is_empty()
    }
}
