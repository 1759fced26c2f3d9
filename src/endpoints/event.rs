use crate::client::{ApiError, Client, Method, Transport};
use crate::types::{Event, EventTeam};

impl<T: Transport> Client<T> {
    /// The currently active event, if any.
    pub fn current_event(&self) -> Result<Option<Event>, ApiError> {
        self.request_single("/v1/rbtvevent/active", &[])
    }

    /// Team information, restricted to active events.
    pub fn current_event_team(&self, team_id: u64) -> Result<EventTeam, ApiError> {
        self.request_single(&format!("/v1/rbtvevent/team/{team_id}"), &[])
    }

    /// The team the authorised user joined for the given (active) event.
    pub fn current_event_joined_team(&self, event_id: u64) -> Result<EventTeam, ApiError> {
        self.require_auth(Some("user.rbtvevent.read"))?;
        self.request_single(&format!("/v1/rbtvevent/{event_id}/team"), &[])
    }

    /// Joins a team of the given (active) event.
    pub fn current_event_join_team(
        &self,
        event_id: u64,
        team_id: u64,
    ) -> Result<EventTeam, ApiError> {
        self.require_auth(Some("user.rbtvevent.manage"))?;
        self.send(
            Method::Post,
            &format!("/v1/rbtvevent/{event_id}/team/{team_id}/join"),
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{ScriptedTransport, envelope};
    use crate::client::{ApiError, Method};
    use crate::types::TeamJoinStrategy;
    use serde_json::json;

    #[test]
    fn test_current_event_none() {
        let client = ScriptedTransport::client();
        client.transport().push(envelope(json!(null)));

        assert!(client.current_event().unwrap().is_none());
        assert_eq!(client.transport().last_target(), "/v1/rbtvevent/active");
    }

    #[test]
    fn test_current_event() {
        let client = ScriptedTransport::client();
        client.transport().push(envelope(json!({
            "slug": "charity", "name": "Charity", "active": true,
            "teams": [{"id": 1, "name": "Rot", "joinStrategy": 1, "icon": "red.png"}],
        })));

        let event = client.current_event().unwrap().unwrap();
        let teams = event.teams.unwrap();
        assert_eq!(teams[0].join_strategy, Some(TeamJoinStrategy::Joinable));
    }

    #[test]
    fn test_current_event_team() {
        let client = ScriptedTransport::client();
        client.transport().push(envelope(json!({"id": 2, "name": "Blau"})));

        assert_eq!(client.current_event_team(2).unwrap().id, Some(2));
        assert_eq!(client.transport().last_target(), "/v1/rbtvevent/team/2");
    }

    #[test]
    fn test_team_membership_requires_token() {
        let client = ScriptedTransport::client();
        assert!(matches!(
            client.current_event_joined_team(1),
            Err(ApiError::AuthRequired {
                scope: Some("user.rbtvevent.read")
            })
        ));
        assert!(matches!(
            client.current_event_join_team(1, 2),
            Err(ApiError::AuthRequired {
                scope: Some("user.rbtvevent.manage")
            })
        ));
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn test_join_team_posts() {
        let client = ScriptedTransport::authorized_client();
        client.transport().push(envelope(json!({"id": 2})));

        client.current_event_join_team(1, 2).unwrap();
        let request = &client.transport().requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.path(), "/v1/rbtvevent/1/team/2/join");
    }

    #[test]
    fn test_joined_team_sends_token() {
        let client = ScriptedTransport::authorized_client();
        client
            .transport()
            .push(envelope(json!({"id": 4, "name": "Rot", "eventSlug": "charity"})));

        let team = client.current_event_joined_team(9).unwrap();
        assert_eq!(team.name.as_deref(), Some("Rot"));

        let request = &client.transport().requests()[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.bearer.as_deref(), Some("token"));
        assert_eq!(client.transport().last_target(), "/v1/rbtvevent/9/team");
    }
}
