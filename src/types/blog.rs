use super::bohne::BohnePortrait;
use super::shared::{Date, Image, ImagesOrString, Link};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    pub id: String,
    pub visible_name: String,
    pub color: String,
}

/// Authors are either embedded portraits or bare team member ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    Portraits(Vec<BohnePortrait>),
    Ids(Vec<u64>),
}

/// Category of a post, embedded or referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Embedded(BlogCategory),
    Id(String),
}

/// Short form of a raffle linked from a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleTeaser {
    pub id: Option<u64>,
    pub slug: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "descriptionHTML")]
    pub description_html: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub participation_available: Option<bool>,
    pub frontend_theme: Option<String>,
    pub price_image: Option<Vec<Image>>,
    pub raffle_winner: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Raffles {
    Teasers(Vec<RaffleTeaser>),
    Ids(Vec<u64>),
}

/// A full blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(rename = "contentMK")]
    pub content_mk: Option<String>,
    #[serde(rename = "contentHTML")]
    pub content_html: Option<String>,
    pub is_disabled: Option<bool>,
    pub publish_date: Option<Date>,
    pub create_date: Option<Date>,
    pub last_change_date: Option<Date>,
    pub authors: Option<Authors>,
    pub title_image: Option<ImagesOrString>,
    pub thumb_image: Option<ImagesOrString>,
    pub links: Option<Vec<Link>>,
    pub is_visible_in_promo: Option<bool>,
    pub promo_image: Option<ImagesOrString>,
    pub ci_is_visible: Option<bool>,
    pub ci_subtitle: Option<String>,
    pub is_sponsored: Option<bool>,
    pub category: Option<Category>,
    pub raffles: Option<Raffles>,
}

impl BlogPost {
    /// The post body as plain text, converted from its HTML rendition.
    pub fn plain_text(&self) -> Option<String> {
        self.content_html
            .as_deref()
            .map(|html| nanohtml2text::html2text(html).trim().to_string())
    }
}

/// Reduced blog post as used in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPreview {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub publish_date: Date,
    pub authors: Vec<BohnePortrait>,
    pub thumb_image: Vec<Image>,
    pub promo_image: Vec<Image>,
    pub is_sponsored: bool,
    pub category: Option<BlogCategory>,
}
