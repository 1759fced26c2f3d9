use super::bohne::BohnePortrait;
use super::cms::CmsRoute;
use super::shared::{Image, ImagesOrString, StreamInfoShow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsocketParameters {
    pub url: String,
    pub path: String,
}

int_enum! {
    /// External identity providers a user can log in with.
    pub enum AuthProviderType {
        Local = 0,
        Google = 1,
        Twitch = 2,
        Steam = 3,
        Reddit = 4,
        Discord = 5,
        Twitter = 6,
        Facebook = 7,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthProvider {
    pub name: String,
    pub public_name: String,
    pub available: bool,
    #[serde(rename = "type")]
    pub kind: AuthProviderType,
    pub sort_prio: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Twitch,
    Youtube,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelGroupType {
    Main,
    Talent,
    Guest,
    #[serde(other)]
    Unknown,
}

/// A single streaming channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub mgmt_id: Option<u64>,
    pub channel_group_id: Option<u64>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub service_type: Option<ServiceType>,
    pub platform_id: Option<String>,
    pub platform_icon: Option<String>,
    pub platform_thumbnail: Option<String>,
    pub yt_token: Option<String>,
    pub yt_live_chat_id: Option<ImagesOrString>,
    pub twitch_channel: Option<ImagesOrString>,
    pub current_game: Option<ImagesOrString>,
    pub currently_live: Option<bool>,
    pub viewers: Option<u64>,
}

/// Channels grouped per presenter or show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelGroup {
    pub mgmt_id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Option<ChannelGroupType>,
    pub name: Option<String>,
    pub description: Option<ImagesOrString>,
    pub channel_group_icon: Option<Vec<Image>>,
    pub channels: Option<Vec<Channel>>,
    pub bohnen: Option<Vec<BohnePortrait>>,
    pub currently_in_main_context: Option<bool>,
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelGroupStream {
    pub channel_group: ChannelGroup,
    pub stream_info_show: StreamInfoShow,
}

/// Everything the web frontend needs on startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendInit {
    pub routes: Option<Vec<CmsRoute>>,
    pub auth_providers: Option<Vec<AuthProvider>>,
    pub websocket: Option<WebsocketParameters>,
    pub channel_group_info: Option<Vec<ChannelGroupStream>>,
    pub recaptcha_site_key: Option<String>,
    pub page_theme: Option<String>,
    pub random_youtube_api_key: Option<String>,
    pub frontend_version: Option<u64>,
    pub vapid_public_key: Option<ImagesOrString>,
    pub apple_push_id: Option<ImagesOrString>,
}
