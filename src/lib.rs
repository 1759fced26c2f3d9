//! rbtv_api - Typed client for the Rocket Beans TV REST API
//!
//! This library wraps the public API at `api.rocketbeans.tv`: shows, seasons,
//! episodes, team members ("Bohnen"), the blog, the program schedule, viewer
//! counts and a handful of authenticated user endpoints.
//!
//! All operations are methods on [`Client`]. Single records come back as
//! `Result<T, ApiError>`; paginated listings come back as lazy iterators that
//! fetch one page per step. Identical GET requests are answered from a small
//! in-memory LRU memo.
//!
//! ```no_run
//! use rbtv_api::{Client, ShowSortBy};
//!
//! let client = Client::new()?;
//! for show in client.shows(ShowSortBy::LastEpisode, None).take(5) {
//!     let show = show?;
//!     println!("{:?} {}", show.id, show.title.unwrap_or_default());
//! }
//! # Ok::<(), rbtv_api::ApiError>(())
//! ```

mod client;
mod endpoints;
mod lookup;
pub mod params;
pub mod types;

// Request layer
pub use client::{
    ApiError, Client, ClientConfig, DEFAULT_HOST, DEFAULT_SCHEME, HttpRequest, HttpResponse,
    Items, Method, Pagination, Pages, Params, ReqwestTransport, Transport,
};

pub use endpoints::{MAX_SCHEDULE_RANGE_DAYS, PAGE_SIZE};
pub use lookup::{alphastring, bohne_name_to_id, show_name_to_id};
pub use params::{Order, ShowFilter, ShowSortBy};
