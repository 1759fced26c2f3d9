use crate::client::{ApiError, Client, Transport};
use crate::types::{Bohne, BohnePortrait};

impl<T: Transport> Client<T> {
    /// Reduced information about all team members.
    pub fn bohnen_portraits(&self) -> Result<Vec<BohnePortrait>, ApiError> {
        self.request_single("/v1/bohne/portrait/all", &[])
    }

    /// Full profile of a single team member.
    pub fn bohne(&self, mgmtid: u64) -> Result<Bohne, ApiError> {
        self.request_single(&format!("/v1/bohne/{mgmtid}"), &[])
    }

    pub fn bohne_portrait(&self, mgmtid: u64) -> Result<BohnePortrait, ApiError> {
        self.request_single(&format!("/v1/bohne/portrait/{mgmtid}"), &[])
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{ScriptedTransport, envelope};
    use crate::types::BohneRole;
    use serde_json::json;

    fn simon() -> serde_json::Value {
        json!({"mgmtid": 33, "name": "Simon", "role": "onair", "episodeCount": 1200, "images": []})
    }

    #[test]
    fn test_bohnen_portraits() {
        let client = ScriptedTransport::client();
        client.transport().push(envelope(json!([simon()])));

        let portraits = client.bohnen_portraits().unwrap();
        assert_eq!(portraits[0].mgmtid, 33);
        assert_eq!(portraits[0].role, BohneRole::Onair);
        assert_eq!(client.transport().last_target(), "/v1/bohne/portrait/all");
    }

    #[test]
    fn test_bohne() {
        let client = ScriptedTransport::client();
        client
            .transport()
            .push(envelope(json!({"mgmtid": 33, "firstname": "Simon"})));

        let bohne = client.bohne(33).unwrap();
        assert_eq!(bohne.firstname.as_deref(), Some("Simon"));
        assert_eq!(client.transport().last_target(), "/v1/bohne/33");
    }

    #[test]
    fn test_bohne_portrait() {
        let client = ScriptedTransport::client();
        client.transport().push(envelope(simon()));

        assert_eq!(client.bohne_portrait(33).unwrap().name, "Simon");
        assert_eq!(client.transport().last_target(), "/v1/bohne/portrait/33");
    }
}
