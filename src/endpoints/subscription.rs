//! Subscriptions of the authorised user. Every operation here needs an
//! access token.

use crate::client::{ApiError, Client, Method, Transport};
use crate::types::{
    SubscriptionDefault, SubscriptionFlags, SubscriptionList, SubscriptionResponse,
    SubscriptionType,
};
use serde_json::json;

const SCOPE_READ: &str = "user.subscriptions.read";
const SCOPE_MANAGE: &str = "user.subscriptions.manage";

impl<T: Transport> Client<T> {
    pub fn subscribe(
        &self,
        kind: SubscriptionType,
        entity_id: u64,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.require_auth(Some(SCOPE_MANAGE))?;
        self.send(
            Method::Post,
            &format!("/v1/subscription/{kind}/{entity_id}"),
            None,
        )
    }

    pub fn unsubscribe(
        &self,
        kind: SubscriptionType,
        entity_id: u64,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.require_auth(Some(SCOPE_MANAGE))?;
        self.send(
            Method::Delete,
            &format!("/v1/subscription/{kind}/{entity_id}"),
            None,
        )
    }

    /// All subscriptions of the authorised user.
    pub fn subscriptions(&self) -> Result<SubscriptionList, ApiError> {
        self.require_auth(Some(SCOPE_READ))?;
        self.request_single("/v1/subscription/mysubscriptions", &[])
    }

    /// Notification settings for a single subscription.
    pub fn subscription(
        &self,
        kind: SubscriptionType,
        entity_id: u64,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.require_auth(Some(SCOPE_READ))?;
        self.request_single(&format!("/v1/subscription/{kind}/{entity_id}"), &[])
    }

    /// Changes a subscription. Fields left as `None` are sent as `null`.
    pub fn modify_subscription(
        &self,
        kind: SubscriptionType,
        entity_id: u64,
        subscribed: Option<bool>,
        flags: Option<SubscriptionFlags>,
    ) -> Result<SubscriptionResponse, ApiError> {
        self.require_auth(Some(SCOPE_MANAGE))?;

        let body = SubscriptionResponse {
            kind: Some(kind),
            id: Some(entity_id),
            subscribed,
            flags,
        };
        let body = serde_json::to_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;

        self.send(
            Method::Patch,
            &format!("/v1/subscription/{kind}/{entity_id}"),
            Some(body),
        )
    }

    /// Changes the default notification flags for a subscription type.
    pub fn modify_subscription_defaults(
        &self,
        kind: SubscriptionType,
        flags: Option<SubscriptionFlags>,
    ) -> Result<SubscriptionDefault, ApiError> {
        self.require_auth(Some(SCOPE_MANAGE))?;

        let body = json!({ "type": kind, "flags": flags });
        self.send(
            Method::Patch,
            &format!("/v1/subscription/mydefault/{kind}"),
            Some(body),
        )
    }
}
