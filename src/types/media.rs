//! Media library records: shows, seasons and episodes.

use super::bohne::BohnePortrait;
use super::shared::{Date, Image, ImagesOrString, Link};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Podcast feeds of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastInfo {
    pub feed_url: Option<String>,
    pub soundcloud_id: Option<String>,
    pub itunes_url: Option<String>,
    pub spotify_url: Option<String>,
    pub podigee_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: Option<u64>,
    pub show_id: Option<u64>,
    pub name: Option<ImagesOrString>,
    pub numeric: Option<u64>,
    pub thumbnail: Option<Vec<Image>>,
    pub podcast_id: Option<u64>,
}

impl Season {
    /// Human readable season name.
    ///
    /// Uses the season's own name if it has one, otherwise fills the season
    /// number into `template` at `{}`, otherwise falls back to `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtv_api::types::Season;
    ///
    /// let season: Season = serde_json::from_str(r#"{"id": 1, "numeric": 3}"#).unwrap();
    /// assert_eq!(season.display_name("Season {}", ""), "Season 3");
    /// ```
    pub fn display_name(&self, template: &str, default: &str) -> String {
        match (&self.name, self.numeric) {
            (Some(ImagesOrString::String(name)), _) if !name.is_empty() => name.clone(),
            (_, Some(numeric)) if numeric != 0 => template.replacen("{}", &numeric.to_string(), 1),
            _ => default.to_string(),
        }
    }
}

/// Reduced episode as used in listings and as previous/next links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodePreview {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub show_id: Option<u64>,
    pub show_name: Option<String>,
    pub thumbnail: Option<Vec<Image>>,
    pub hosts: Option<Vec<u64>>,
    pub distribution_publishing_date: Option<Date>,
    pub first_broadcastdate: Option<Date>,
    pub duration: Option<u64>,
    pub is_available: Option<bool>,
}

/// Platform a video token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPlatform {
    Youtube,
    Twitch,
    Cloudflare,
    #[serde(other)]
    Unknown,
}

/// Reference to the actual video of an episode on a hosting platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoToken {
    pub id: Option<u64>,
    pub media_episode_id: Option<u64>,
    pub token: Option<String>,
    #[serde(rename = "type")]
    pub platform: Option<TokenPlatform>,
    pub length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: Option<u64>,
    pub show_id: Option<u64>,
    pub show_name: Option<String>,
    pub season_id: Option<u64>,
    pub episode: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<Vec<Image>>,
    pub links: Option<Vec<Link>>,
    pub hosts: Option<Vec<u64>>,
    pub tokens: Option<Vec<VideoToken>>,
    pub distribution_publishing_date: Option<Date>,
    pub first_broadcastdate: Option<Date>,
    pub duration: Option<u64>,
    pub prev: Option<EpisodePreview>,
    pub next: Option<EpisodePreview>,
    pub is_available: Option<bool>,
}

/// Watch progress of the authorised user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeProgress {
    pub last_seen_part: u64,
    pub total: u64,
    pub progress: Vec<u64>,
}

/// Episodes together with the team members hosting them, keyed by mgmtid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpisodeCombined {
    #[serde(default)]
    pub bohnen: BTreeMap<u64, BohnePortrait>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    pub progress: Option<BTreeMap<u64, EpisodeProgress>>,
}

/// Reduced episodes together with their hosts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpisodePreviewCombined {
    #[serde(default)]
    pub bohnen: BTreeMap<u64, BohnePortrait>,
    #[serde(default)]
    pub episodes: Vec<EpisodePreview>,
    pub progress: Option<BTreeMap<u64, EpisodeProgress>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub duration: Option<u64>,
    pub is_external: Option<bool>,
    pub is_true_podcast: Option<bool>,
    pub thumbnail: Option<Vec<Image>>,
    pub background_image: Option<Vec<Image>>,
    pub slideshow_images: Option<Vec<Vec<Image>>>,
    pub links: Option<Vec<Link>>,
    pub hosts: Option<Vec<BohnePortrait>>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    pub has_unsorted_episodes: Option<bool>,
    pub last_episode: Option<EpisodeCombined>,
    pub podcast: Option<PodcastInfo>,
    pub status_public_note: Option<String>,
    pub is_subscribed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowPreview {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub is_external: Option<bool>,
    pub is_true_podcast: Option<bool>,
    pub thumbnail: Option<Vec<Image>>,
    pub has_podcast: Option<bool>,
    pub is_subscribed: Option<bool>,
}

/// Minimal show record, enough to map titles to ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowPreviewMini {
    pub id: u64,
    pub title: String,
    pub thumbnail: Vec<Image>,
}
