use super::bohne::BohnePortrait;
use super::frontend::ChannelGroup;
use super::shared::{Date, Image, Link, MediaType};
use serde::{Deserialize, Serialize};

/// One broadcast in the program schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub topic: Option<String>,
    pub game: Option<String>,
    pub show_id: Option<u64>,
    pub episode_id: Option<u64>,
    pub episode_image: Option<String>,
    pub episode_images: Option<Vec<Image>>,
    pub bohnen: Option<Vec<BohnePortrait>>,
    pub time_start: Option<Date>,
    pub time_end: Option<Date>,
    pub publishing_date: Option<Date>,
    pub duration: Option<u64>,
    pub duration_class: Option<u64>,
    pub stream_exclusive: Option<bool>,
    pub is_subscribed: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<MediaType>,
    pub links: Option<Vec<Link>>,
    pub channel_groups: Option<Vec<ChannelGroup>>,
    pub open_end: Option<bool>,
}

/// All broadcasts of one schedule day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: Date,
    pub elements: Vec<ScheduleItem>,
}
