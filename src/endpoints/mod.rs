//! Bindings of the API operations onto [`Client`](crate::Client).
//!
//! Each submodule adds one `impl` block per API area. The bindings are thin:
//! a fixed path template, validated parameters, and one of the request
//! layer's fetch modes.

mod blog;
mod bohne;
mod cms;
mod event;
mod frontend;
mod media;
mod schedule;
mod shop;
mod stream;
mod subscription;
mod user;

pub use schedule::MAX_SCHEDULE_RANGE_DAYS;

/// Page size used for every paginated endpoint.
pub const PAGE_SIZE: u64 = 50;
