use crate::client::{ApiError, Client, Transport};
use crate::types::FrontendInit;

impl<T: Transport> Client<T> {
    /// Information needed to initialize the web frontend, such as the
    /// current stream details and CMS routes.
    pub fn frontend_init(&self) -> Result<FrontendInit, ApiError> {
        self.request_single("/v1/frontend/init", &[])
    }
}
