//! Client configuration

use std::fmt;
use std::time::Duration;

/// Host serving the public API.
pub const DEFAULT_HOST: &str = "api.rocketbeans.tv";

/// Scheme used unless configured otherwise.
pub const DEFAULT_SCHEME: &str = "https";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_MEMO_CAPACITY: usize = 128;

/// Settings for a [`Client`](super::Client).
///
/// Start from [`ClientConfig::default`] and adjust with the `with_*` setters:
///
/// ```
/// use rbtv_api::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_memo_capacity(32);
/// assert_eq!(config.host, "api.rocketbeans.tv");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// URL scheme, `https` unless talking to a local mirror
    pub scheme: String,
    /// Host (and optional port) of the API
    pub host: String,
    /// Timeout applied to every single request
    pub timeout: Duration,
    /// Number of GET responses kept in the request memo; 0 disables it
    pub memo_capacity: usize,
    /// OAuth access token for the user-scoped endpoints
    pub access_token: Option<String>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
            memo_capacity: DEFAULT_MEMO_CAPACITY,
            access_token: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo_capacity = capacity;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// Hand-written so the access token never ends up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .field("memo_capacity", &self.memo_capacity)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
