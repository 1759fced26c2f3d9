//! Request layer for the Rocket Beans TV API
//!
//! Every API operation ends up in one of three calls on [`Client`]: a single
//! memoized GET, a paginated GET sequence, or a non-memoized mutation. All of
//! them unwrap the `{success, data, pagination}` envelope the API wraps its
//! responses in.

mod config;
mod memo;
mod paged;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_SCHEME};
pub use paged::{Items, Pages};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};

use memo::RequestMemo;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use url::Url;

/// Query parameters as sent on the wire, in order.
pub type Params = Vec<(&'static str, String)>;

/// Errors that can occur while talking to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round-trip itself failed (connection, timeout, TLS, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status code
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The response body was not the JSON we expected
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// The envelope reported `success: false`
    #[error("API reported failure for {url}")]
    Unsuccessful { url: String },

    /// A paginated endpoint answered without a `pagination` block
    #[error("Paginated response from {url} has no pagination data")]
    MissingPagination { url: String },

    /// A parameter value is not one of the accepted choices
    #[error(
        "Invalid value {value:?} for {parameter}, expected one of: {}",
        .choices.join(", ")
    )]
    InvalidChoice {
        parameter: &'static str,
        value: String,
        choices: &'static [&'static str],
    },

    /// A parameter was rejected before any request was made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs an OAuth access token, but none is configured
    #[error("OAuth access token required (scope: {})", .scope.unwrap_or("none"))]
    AuthRequired { scope: Option<&'static str> },

    /// No show matches the given name
    #[error("Could not find show {0}")]
    ShowNotFound(String),

    /// No team member matches the given name
    #[error("Could not find Bohne {0}")]
    BohneNotFound(String),

    /// The show exists but has no season with that id
    #[error("Season id not found: show={show_id} season={season_id}")]
    SeasonNotFound { show_id: u64, season_id: u64 },
}

/// Pagination block attached to paged responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

/// The `{success, data, pagination}` wrapper around every API response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    /// URL the envelope was fetched from, for error reporting
    #[serde(skip)]
    pub source: String,
}

impl Envelope {
    fn parse(url: &Url, body: &str) -> Result<Self, ApiError> {
        let mut envelope: Envelope =
            serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
        envelope.source = url.to_string();
        Ok(envelope)
    }

    fn ensure_success(&self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Unsuccessful {
                url: self.source.clone(),
            })
        }
    }

    /// Asserts `success` and deserializes the `data` payload.
    pub fn into_data<D: DeserializeOwned>(self) -> Result<D, ApiError> {
        self.ensure_success()?;
        serde_json::from_value(self.data).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Blocking client for the Rocket Beans TV API.
///
/// The transport is pluggable so the request layer can be exercised without
/// a network; [`Client::new`] wires up the reqwest based default.
pub struct Client<T = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
    memo: Mutex<RequestMemo<Envelope>>,
}

impl Client<ReqwestTransport> {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client talking HTTP through reqwest with the given configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of an arbitrary transport.
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        let memo = Mutex::new(RequestMemo::new(config.memo_capacity));
        Self {
            transport,
            config,
            memo,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the absolute URL for an API path like `/v1/blog/all`.
    pub fn url(&self, path: &str, params: &[(&'static str, String)]) -> Result<Url, ApiError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.url_from_segments(&segments, params)
    }

    /// Builds an absolute URL from raw path segments; each segment is
    /// percent-encoded on its own, so it may contain `/` or spaces.
    ///
    /// URLs cannot carry a literal `.` or `..` segment (not even encoded as
    /// `%2E`), so those are rejected instead of being dropped.
    pub(crate) fn url_from_segments(
        &self,
        segments: &[&str],
        params: &[(&'static str, String)],
    ) -> Result<Url, ApiError> {
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ApiError::InvalidArgument(format!(
                "path segment {dots:?} cannot be sent"
            )));
        }

        let base = format!("{}://{}/", self.config.scheme, self.config.host);
        let mut url = Url::parse(&base)
            .map_err(|e| ApiError::InvalidArgument(format!("invalid base URL {base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidArgument(format!("base URL {base} cannot carry a path")))?
            .clear()
            .extend(segments);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(url)
    }

    /// Fails with [`ApiError::AuthRequired`] unless an access token is configured.
    pub(crate) fn require_auth(&self, scope: Option<&'static str>) -> Result<(), ApiError> {
        match self.config.access_token {
            Some(_) => Ok(()),
            None => Err(ApiError::AuthRequired { scope }),
        }
    }

    /// Issues a single GET and returns the unwrapped `data` payload.
    pub fn request_single<D: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<D, ApiError> {
        let url = self.url(path, params)?;
        self.get_envelope(url)?.into_data()
    }

    /// Lazily walks a paginated endpoint, yielding each page's `data`.
    pub fn request_pages<D: DeserializeOwned>(
        &self,
        path: &str,
        limit: u64,
        params: Params,
    ) -> Pages<'_, T, D> {
        Pages::new(self, path, limit, params)
    }

    /// Lazily walks a paginated endpoint whose pages are arrays, yielding
    /// the individual elements.
    pub fn request_items<D: DeserializeOwned>(
        &self,
        path: &str,
        limit: u64,
        params: Params,
    ) -> Items<'_, T, D> {
        Items::new(self.request_pages(path, limit, params))
    }

    /// Issues a non-memoized request with an optional JSON body and returns
    /// the unwrapped `data` payload.
    pub fn send<D: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<D, ApiError> {
        let url = self.url(path, &[])?;
        log::debug!("{} {}", method, url);

        let request = HttpRequest {
            method,
            url,
            bearer: self.config.access_token.clone(),
            body,
        };
        let response = self.execute(&request)?;
        Envelope::parse(&request.url, &response.body)?.into_data()
    }

    /// GETs an envelope, answering from the memo when the same URL was
    /// fetched recently.
    pub(crate) fn get_envelope(&self, url: Url) -> Result<Envelope, ApiError> {
        let key = url.to_string();

        if let Some(envelope) = self.memo().load(&key) {
            log::trace!("memo hit for {}", key);
            return Ok(envelope);
        }
        log::trace!("memo miss for {}", key);
        log::debug!("GET {}", url);

        let request = HttpRequest {
            method: Method::Get,
            url,
            bearer: self.config.access_token.clone(),
            body: None,
        };
        let response = self.execute(&request)?;
        let envelope = Envelope::parse(&request.url, &response.body)?;

        self.memo().store(key, envelope.clone());
        Ok(envelope)
    }

    /// Number of envelopes currently held by the request memo.
    pub fn memoized_len(&self) -> usize {
        self.memo().len()
    }

    /// Drops every memoized response.
    pub fn clear_memo(&self) {
        self.memo().clear();
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.transport.execute(request)?;
        if !(200..300).contains(&response.status) {
            return Err(ApiError::Http {
                status: response.status,
                url: request.url.to_string(),
            });
        }
        Ok(response)
    }

    fn memo(&self) -> MutexGuard<'_, RequestMemo<Envelope>> {
        // The memo holds no invariants a panicking holder could break.
        self.memo.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
