//! Media library: episodes and shows.

use super::PAGE_SIZE;
use crate::client::{ApiError, Client, Items, Pages, Transport};
use crate::params::{Order, ShowFilter, ShowSortBy, show_list_params};
use crate::types::{
    EpisodeCombined, EpisodePreviewCombined, Show, ShowPreview, ShowPreviewMini,
};

impl<T: Transport> Client<T> {
    /// All episodes featuring the given team member, one page at a time.
    pub fn episodes_by_bohne(&self, bohne_id: u64, order: Order) -> Pages<'_, T, EpisodeCombined> {
        self.request_pages(
            &format!("/v1/media/episode/bybohne/{bohne_id}"),
            PAGE_SIZE,
            order.to_params(),
        )
    }

    pub fn episode(&self, episode_id: u64) -> Result<EpisodeCombined, ApiError> {
        self.request_single(&format!("/v1/media/episode/{episode_id}"), &[])
    }

    /// All episodes of a season, one page at a time.
    pub fn episodes_by_season(
        &self,
        season_id: u64,
        order: Order,
    ) -> Pages<'_, T, EpisodeCombined> {
        self.request_pages(
            &format!("/v1/media/episode/byseason/{season_id}"),
            PAGE_SIZE,
            order.to_params(),
        )
    }

    /// All episodes of a show, one page at a time.
    pub fn episodes_by_show(&self, show_id: u64, order: Order) -> Pages<'_, T, EpisodeCombined> {
        self.request_pages(
            &format!("/v1/media/episode/byshow/{show_id}"),
            PAGE_SIZE,
            order.to_params(),
        )
    }

    /// The most recently published episodes.
    pub fn newest_episodes_preview(&self, order: Order) -> Pages<'_, T, EpisodePreviewCombined> {
        self.request_pages(
            "/v1/media/episode/preview/newest",
            PAGE_SIZE,
            order.to_params(),
        )
    }

    /// Episodes from subscribed shows and team members of the authorised user.
    ///
    /// Fails right away with [`ApiError::AuthRequired`] when no access token
    /// is configured.
    pub fn abobox_content(&self) -> Result<Pages<'_, T, EpisodePreviewCombined>, ApiError> {
        self.require_auth(None)?;
        Ok(self.request_pages("/v1/media/abobox/self", PAGE_SIZE, Vec::new()))
    }

    /// Episodes of a show which are not assigned to any season.
    pub fn unsorted_episodes_by_show(
        &self,
        show_id: u64,
        order: Order,
    ) -> Pages<'_, T, EpisodePreviewCombined> {
        self.request_pages(
            &format!("/v1/media/episode/byshow/unsorted/{show_id}"),
            PAGE_SIZE,
            order.to_params(),
        )
    }

    /// Reduced information about the episodes of a team member. Unlike the
    /// other listings this endpoint is not paginated and takes no query, so
    /// the order argument is not sent.
    pub fn episodes_by_bohne_preview(
        &self,
        bohne_id: u64,
        _order: Order,
    ) -> Result<EpisodePreviewCombined, ApiError> {
        self.request_single(
            &format!("/v1/media/episode/bybohne/preview/{bohne_id}"),
            &[],
        )
    }

    pub fn episode_preview(&self, episode_id: u64) -> Result<EpisodePreviewCombined, ApiError> {
        self.request_single(&format!("/v1/media/episode/preview/{episode_id}"), &[])
    }

    pub fn episodes_by_season_preview(
        &self,
        season_id: u64,
        order: Order,
    ) -> Pages<'_, T, EpisodePreviewCombined> {
        self.request_pages(
            &format!("/v1/media/episode/byseason/preview/{season_id}"),
            PAGE_SIZE,
            order.to_params(),
        )
    }

    pub fn episodes_by_show_preview(
        &self,
        show_id: u64,
        order: Order,
    ) -> Pages<'_, T, EpisodePreviewCombined> {
        self.request_pages(
            &format!("/v1/media/episode/byshow/preview/{show_id}"),
            PAGE_SIZE,
            order.to_params(),
        )
    }

    pub fn unsorted_episodes_by_show_preview(
        &self,
        show_id: u64,
        order: Order,
    ) -> Pages<'_, T, EpisodePreviewCombined> {
        self.request_pages(
            &format!("/v1/media/episode/byshow/unsorted/preview/{show_id}"),
            PAGE_SIZE,
            order.to_params(),
        )
    }

    /// All shows.
    pub fn shows(&self, sortby: ShowSortBy, only: Option<ShowFilter>) -> Items<'_, T, Show> {
        self.request_items(
            "/v1/media/show/all",
            PAGE_SIZE,
            show_list_params(sortby, only),
        )
    }

    pub fn show(&self, show_id: u64) -> Result<Show, ApiError> {
        self.request_single(&format!("/v1/media/show/{show_id}"), &[])
    }

    pub fn featured_shows_preview(&self) -> Result<Vec<ShowPreview>, ApiError> {
        self.request_single("/v1/media/show/preview/featured", &[])
    }

    /// Reduced information about all shows.
    pub fn shows_preview(
        &self,
        sortby: ShowSortBy,
        only: Option<ShowFilter>,
    ) -> Items<'_, T, ShowPreview> {
        self.request_items(
            "/v1/media/show/preview/all",
            PAGE_SIZE,
            show_list_params(sortby, only),
        )
    }

    pub fn show_preview(&self, show_id: u64) -> Result<ShowPreview, ApiError> {
        self.request_single(&format!("/v1/media/show/preview/{show_id}"), &[])
    }

    /// Minimal information about all shows, in a single response.
    pub fn shows_mini(
        &self,
        sortby: ShowSortBy,
        only: Option<ShowFilter>,
    ) -> Result<Vec<ShowPreviewMini>, ApiError> {
        self.request_single(
            "/v1/media/show/preview/mini/all",
            &show_list_params(sortby, only),
        )
    }
}
