use super::shared::{ImagesOrString, Link};
use serde::{Deserialize, Serialize};

int_enum! {
    /// How users end up in an event team.
    pub enum TeamJoinStrategy {
        Disabled = 0,
        Joinable = 1,
        AutoassignOdd = 2,
        AutoassignEven = 3,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTeam {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<ImagesOrString>,
    pub join_strategy: Option<TeamJoinStrategy>,
    pub event_slug: Option<String>,
    pub internal_slug: Option<String>,
}

/// A community event such as a charity stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub slug: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "descriptionHTML")]
    pub description_html: Option<String>,
    #[serde(rename = "descriptionMD")]
    pub description_md: Option<String>,
    pub active: Option<bool>,
    pub teams: Option<Vec<EventTeam>>,
    pub cmspage: Option<String>,
    pub sub_links: Option<Vec<Link>>,
}
