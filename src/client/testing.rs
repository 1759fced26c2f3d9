//! Scripted transport for unit tests

use super::{ApiError, Client, ClientConfig, HttpRequest, HttpResponse, Transport};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Serves queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client with default configuration on top of an empty script.
    pub fn client() -> Client<ScriptedTransport> {
        Client::with_transport(Self::new(), ClientConfig::default())
    }

    /// A client with an access token configured.
    pub fn authorized_client() -> Client<ScriptedTransport> {
        Client::with_transport(
            Self::new(),
            ClientConfig::default().with_access_token("token"),
        )
    }

    /// Queues a 200 response with the given JSON body.
    pub fn push(&self, body: Value) {
        self.push_status(200, &body.to_string());
    }

    pub fn push_status(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Path and query of the most recent request, e.g. `/v1/blog/1?x=y`.
    pub fn last_target(&self) -> String {
        let requests = self.requests.borrow();
        let url = &requests.last().expect("no request was made").url;
        match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        }
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Request(format!("no scripted response for {}", request.url)))
    }
}

/// A successful envelope around `data`.
pub(crate) fn envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// A successful paged envelope around `data`.
pub(crate) fn page(data: Value, offset: u64, limit: u64, total: u64) -> Value {
    json!({
        "success": true,
        "data": data,
        "pagination": { "offset": offset, "limit": limit, "total": total },
    })
}

/// An envelope reporting failure.
pub(crate) fn failure() -> Value {
    json!({ "success": false, "data": null })
}
