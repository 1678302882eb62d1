//! Connection settings for the namenode.

use std::time::Duration;

/// Path prefix of the WebHDFS REST API.
pub const WEBHDFS_PREFIX: &str = "webhdfs/v1";

/// How to reach the namenode. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// `host:port` of the namenode's HTTP interface.
    pub endpoint: String,
    /// Use `https://` instead of `http://`.
    pub https: bool,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            https: false,
            timeout: None,
        }
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn scheme(&self) -> &'static str {
        if self.https { "https" } else { "http" }
    }

    /// Base URL of the REST API, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}/{}", self.scheme(), self.endpoint, WEBHDFS_PREFIX)
    }

    /// Host part of the endpoint, used in the prompt.
    pub fn host(&self) -> &str {
        self.endpoint
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or(&self.endpoint)
    }
}

/// Validate a `host:port` endpoint string.
pub fn parse_endpoint(value: &str) -> Result<String, String> {
    let (host, port) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected host:port, got '{}'", value))?;
    if host.is_empty() {
        return Err(format!("missing host in '{}'", value));
    }
    port.parse::<u16>()
        .map_err(|_| format!("invalid port '{}'", port))?;
    Ok(value.to_string())
}
