use crate::client::{ApiError, Client, Transport};
use crate::types::StreamCount;

impl<T: Transport> Client<T> {
    /// Current viewers, separately for YouTube and Twitch and combined.
    pub fn viewer_count(&self) -> Result<StreamCount, ApiError> {
        self.request_single("/v1/streamcount", &[])
    }
}
