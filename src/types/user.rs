use super::shared::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

int_enum! {
    /// Supporter tier of a user.
    pub enum SupporterLevel {
        None = 0,
        Supporter = 1,
        Clubmember = 2,
        Tier3 = 3,
    }
}

/// The authorised user. Which fields are present depends on the granted scopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<u64>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub email_verification_pending: Option<bool>,
    pub registration_date: Option<Date>,
    pub no_password_set: Option<bool>,
    pub second_factor_enabled: Option<bool>,
    pub supporter_level: Option<SupporterLevel>,
    pub permissions: Option<BTreeMap<String, bool>>,
    pub rbtv_event_team: Option<u64>,
}
