use crate::client::{ApiError, Client, Transport};
use crate::types::{CmsPage, CmsRoute};

impl<T: Transport> Client<T> {
    /// Frontend paths which are connected to CMS pages.
    pub fn cms_routes(&self) -> Result<Vec<CmsRoute>, ApiError> {
        self.request_single("/v1/cms/route/all", &[])
    }

    pub fn cms_page(&self, cms_id: &str) -> Result<CmsPage, ApiError> {
        self.request_single(&format!("/v1/cms/{cms_id}"), &[])
    }
}
