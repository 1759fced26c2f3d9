//! Convenience lookups built on top of the plain endpoints.
//!
//! Names typed by humans rarely match the API's spelling exactly, so show
//! titles and team member names are compared in a normalized form: ASCII
//! transliteration, lowercase, letters only.

use crate::client::{ApiError, Client, Transport};
use crate::params::ShowSortBy;
use crate::types::{BohnePortrait, SearchResult, Season, ShowPreviewMini};

/// Nicknames that differ from the name the API knows a team member by.
const SYNONYMS: &[(&str, &str)] = &[("eddy", "etienne")];

/// Normalizes a name for comparison.
///
/// Transliterates to ASCII, lowercases, and drops everything that is not a
/// letter from a to z.
///
/// # Examples
///
/// ```
/// use rbtv_api::alphastring;
///
/// assert_eq!(alphastring("Étienne"), "etienne");
/// assert_eq!(alphastring("Game Two!"), "gametwo");
/// ```
pub fn alphastring(s: &str) -> String {
    deunicode::deunicode(s)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Finds the id of the show whose normalized title equals the normalized
/// `show_name`. If several shows match, the last one wins.
pub fn show_name_to_id(shows: &[ShowPreviewMini], show_name: &str) -> Result<u64, ApiError> {
    let wanted = alphastring(show_name);
    shows
        .iter()
        .rev()
        .find(|show| alphastring(&show.title) == wanted)
        .map(|show| show.id)
        .ok_or_else(|| ApiError::ShowNotFound(show_name.to_string()))
}

/// Finds the mgmtid of the team member whose normalized name equals the
/// normalized `bohne_name`, taking known nicknames into account.
pub fn bohne_name_to_id(bohnen: &[BohnePortrait], bohne_name: &str) -> Result<u64, ApiError> {
    let normalized = alphastring(bohne_name);
    let wanted = SYNONYMS
        .iter()
        .find(|(nickname, _)| *nickname == normalized)
        .map(|(_, name)| name.to_string())
        .unwrap_or(normalized);

    bohnen
        .iter()
        .rev()
        .find(|bohne| alphastring(&bohne.name) == wanted)
        .map(|bohne| bohne.mgmtid)
        .ok_or_else(|| ApiError::BohneNotFound(bohne_name.to_string()))
}

impl<T: Transport> Client<T> {
    /// A single season of a show, taken from the show's season list.
    pub fn season(&self, show_id: u64, season_id: u64) -> Result<Season, ApiError> {
        let show = self.show(show_id)?;
        show.seasons
            .into_iter()
            .find(|season| season.id == Some(season_id))
            .ok_or(ApiError::SeasonNotFound { show_id, season_id })
    }

    /// Resolves a show title to its id.
    pub fn show_name_to_id(&self, show_name: &str) -> Result<u64, ApiError> {
        let shows = self.shows_mini(ShowSortBy::LastEpisode, None)?;
        show_name_to_id(&shows, show_name)
    }

    /// Resolves a team member's name to their mgmtid.
    pub fn bohne_name_to_id(&self, bohne_name: &str) -> Result<u64, ApiError> {
        let bohnen = self.bohnen_portraits()?;
        bohne_name_to_id(&bohnen, bohne_name)
    }

    pub fn bohne_id_to_name(&self, bohne_id: u64) -> Result<String, ApiError> {
        Ok(self.bohne_portrait(bohne_id)?.name)
    }

    /// Full text search over shows, episodes and blog posts.
    ///
    /// This endpoint is undocumented; it is the one the media library web
    /// page uses.
    pub fn search(&self, term: &str) -> Result<SearchResult, ApiError> {
        let url = self.url_from_segments(&["v1", "search", term], &[])?;
        self.get_envelope(url)?.into_data()
    }
}
