//! Response records of the Rocket Beans TV API.
//!
//! These structures mirror the JSON the API sends. Field names are camelCase
//! on the wire and snake_case here. Fields the API may omit are `Option`s;
//! everything else is required and fails deserialization when missing.

/// Declares an enum that travels as a plain integer on the wire.
///
/// Values without a named variant deserialize into `Unknown` and serialize
/// back unchanged.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            Unknown(i64),
        }

        impl $name {
            /// Numeric value used by the API
            pub fn value(self) -> i64 {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(other) => other,
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                value.value()
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                match value {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }
        }
    };
}

mod blog;
mod bohne;
mod cms;
mod event;
mod frontend;
mod media;
mod schedule;
mod search;
mod shared;
mod shop;
mod subscription;
mod user;

pub use blog::{Authors, BlogCategory, BlogPost, BlogPostPreview, Category, RaffleTeaser, Raffles};
pub use bohne::{Bohne, BohnePortrait, BohneRole};
pub use cms::{CmsPage, CmsRoute};
pub use event::{Event, EventTeam, TeamJoinStrategy};
pub use frontend::{
    AuthProvider, AuthProviderType, Channel, ChannelGroup, ChannelGroupStream, ChannelGroupType,
    FrontendInit, ServiceType, WebsocketParameters,
};
pub use media::{
    Episode, EpisodeCombined, EpisodePreview, EpisodePreviewCombined, EpisodeProgress,
    PodcastInfo, Season, Show, ShowPreview, ShowPreviewMini, TokenPlatform, VideoToken,
};
pub use schedule::{ScheduleDay, ScheduleItem};
pub use search::{SearchResult, SearchResultBlog, SearchResultEpisode, SearchResultShow};
pub use shared::{
    Date, Image, ImagesOrString, Link, MediaType, StreamCount, StreamCountChannelInfo,
    StreamInfoShow, Token, TokenType,
};
pub use shop::ShopItem;
pub use subscription::{
    Subscription, SubscriptionBlogData, SubscriptionBohneData, SubscriptionDefault,
    SubscriptionFilter, SubscriptionFilterSettings, SubscriptionFlags, SubscriptionList,
    SubscriptionResponse, SubscriptionShowData, SubscriptionType,
};
pub use user::{SupporterLevel, User};
