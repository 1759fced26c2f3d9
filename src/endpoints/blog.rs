use super::PAGE_SIZE;
use crate::client::{ApiError, Client, Items, Transport};
use crate::types::{BlogPost, BlogPostPreview};

impl<T: Transport> Client<T> {
    /// All blog posts, newest first.
    pub fn blog_posts(&self) -> Items<'_, T, BlogPost> {
        self.request_items("/v1/blog/all", PAGE_SIZE, Vec::new())
    }

    /// Reduced information about all blog posts.
    pub fn blog_posts_preview(&self) -> Items<'_, T, BlogPostPreview> {
        self.request_items("/v1/blog/preview/all", PAGE_SIZE, Vec::new())
    }

    pub fn blog_post(&self, blogpost_id: u64) -> Result<BlogPost, ApiError> {
        self.request_single(&format!("/v1/blog/{blogpost_id}"), &[])
    }

    pub fn blog_post_preview(&self, blogpost_id: u64) -> Result<BlogPostPreview, ApiError> {
        self.request_single(&format!("/v1/blog/preview/{blogpost_id}"), &[])
    }
}
