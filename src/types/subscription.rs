use serde::{Deserialize, Serialize};
use std::fmt;

int_enum! {
    /// What a subscription refers to.
    pub enum SubscriptionType {
        Bohne = 0,
        Show = 1,
        Highlight = 2,
        Regie = 3,
        Blog = 4,
        Season = 5,
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Notification channels enabled for a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFlags {
    pub notify_email: Option<bool>,
    pub notify_browser: Option<bool>,
    pub notify_whatsapp: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFilterSettings {
    pub is_blacklist: Option<bool>,
    pub new_episode: Option<bool>,
    pub new_show: Option<bool>,
    pub new_blog_post: Option<bool>,
    pub ahead_of_live: Option<bool>,
    /// One flag per reminder slot (5, 15, 30 minutes, 1, 3, 6, 12, 24 hours)
    pub ahead_of_live_times: Option<Vec<bool>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionFilter {
    #[serde(rename = "type")]
    pub kind: SubscriptionType,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "type")]
    pub kind: Option<SubscriptionType>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub flags: Option<SubscriptionFlags>,
    pub filter_settings: Option<SubscriptionFilterSettings>,
    pub filter: Option<Vec<SubscriptionFilter>>,
}

/// Subscription state for one entity. Also the body of modification requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    #[serde(rename = "type")]
    pub kind: Option<SubscriptionType>,
    pub id: Option<u64>,
    pub subscribed: Option<bool>,
    pub flags: Option<SubscriptionFlags>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionBohneData {
    pub id: u64,
    pub name: String,
    pub flags: SubscriptionFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionShowData {
    pub id: u64,
    pub title: String,
    pub flags: SubscriptionFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionBlogData {
    pub id: u64,
    pub name: String,
    pub flags: SubscriptionFlags,
}

/// All subscriptions of the authorised user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionList {
    pub bohnen: Vec<SubscriptionBohneData>,
    pub shows: Vec<SubscriptionShowData>,
    pub blog: Vec<SubscriptionBlogData>,
}

/// Default notification flags for a subscription type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDefault {
    #[serde(rename = "type")]
    pub kind: SubscriptionType,
    pub flags: SubscriptionFlags,
}
