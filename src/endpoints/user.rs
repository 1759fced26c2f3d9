use crate::client::{ApiError, Client, Transport};
use crate::types::User;

impl<T: Transport> Client<T> {
    /// The authorised user. The amount of information depends on the scopes
    /// granted to the access token.
    pub fn user_info(&self) -> Result<User, ApiError> {
        self.require_auth(Some("user.info"))?;
        self.request_single("/v1/user/self", &[])
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ApiError;
    use crate::client::testing::{ScriptedTransport, envelope};
    use crate::types::SupporterLevel;
    use serde_json::json;

    #[test]
    fn test_user_info_requires_token() {
        let client = ScriptedTransport::client();
        assert!(matches!(
            client.user_info(),
            Err(ApiError::AuthRequired {
                scope: Some("user.info")
            })
        ));
    }

    #[test]
    fn test_user_info() {
        let client = ScriptedTransport::authorized_client();
        client.transport().push(envelope(json!({
            "id": 42, "displayName": "zuschauer", "supporterLevel": 2,
            "permissions": {"chat": true},
        })));

        let user = client.user_info().unwrap();
        assert_eq!(user.supporter_level, Some(SupporterLevel::Clubmember));
        assert_eq!(user.permissions.unwrap()["chat"], true);
        assert_eq!(client.transport().last_target(), "/v1/user/self");
    }
}
