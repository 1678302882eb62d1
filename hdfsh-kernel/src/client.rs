//! WebHDFS request layer.
//!
//! Builds namenode URLs, applies the redirect conventions of the protocol and
//! decodes JSON bodies. Everything above this module speaks in terms of
//! [`Response`] and never sees raw HTTP.

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode, Url};
use std::fmt;

use crate::config::ClientConfig;
use crate::error::ShellError;

/// Maximum hops when the transport follows redirects on our behalf.
const MAX_REDIRECTS: usize = 10;

/// WebHDFS operations used by the shell (the `op` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListStatus,
    GetFileStatus,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListStatus => "LISTSTATUS",
            Operation::GetFileStatus => "GETFILESTATUS",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request knobs.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Let the transport follow redirects transparently.
    pub follow_redirect: bool,
    /// Decode the body as JSON.
    pub expect_json: bool,
    /// Extra query parameters, appended after `op`.
    pub params: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            follow_redirect: false,
            expect_json: true,
            params: Vec::new(),
        }
    }
}

impl RequestOptions {
    /// GET with transparent redirect following, as used for metadata lookups.
    pub fn following() -> Self {
        Self {
            follow_redirect: true,
            ..Self::default()
        }
    }
}

/// A namenode response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    /// Decoded body. `None` when JSON was not requested or did not parse.
    pub json: Option<serde_json::Value>,
    /// Raw body text.
    pub text: String,
}

/// Client for the namenode's REST interface.
pub struct NamespaceClient {
    config: ClientConfig,
    /// Follows redirects itself.
    following: Client,
    /// Hands redirects back to us.
    direct: Client,
}

impl NamespaceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ShellError> {
        let following = build_client(&config, Policy::limited(MAX_REDIRECTS))?;
        let direct = build_client(&config, Policy::none())?;
        Ok(Self {
            config,
            following,
            direct,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the request URL for `path` and `op`.
    ///
    /// Each segment of `path` is appended to the API prefix percent-encoded,
    /// so names containing `?`, `#` or `%` reach the namenode intact. The
    /// root maps to the prefix with a trailing `/`.
    pub fn url(
        &self,
        path: &str,
        op: Operation,
        params: &[(String, String)],
    ) -> Result<Url, ShellError> {
        let base = self.config.base_url();
        let mut url = Url::parse(&base)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ShellError::Endpoint(base.clone()))?;
            let mut names = path.split('/').filter(|s| !s.is_empty()).peekable();
            if names.peek().is_none() {
                segments.push("");
            }
            segments.extend(names);
        }
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("op", op.as_str());
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Issue a request against the namenode.
    ///
    /// With `follow_redirect` off, a `307 Temporary Redirect` is answered by
    /// exactly one GET to its `Location`, and that second response is
    /// returned. Transport failures propagate; nothing is retried.
    pub fn request(
        &self,
        path: &str,
        op: Operation,
        options: &RequestOptions,
    ) -> Result<Response, ShellError> {
        let url = self.url(path, op, &options.params)?;
        let client = if options.follow_redirect {
            &self.following
        } else {
            &self.direct
        };

        tracing::debug!(method = %options.method, %op, %url, "namenode request");
        let mut response = client.request(options.method.clone(), url).send()?;

        if response.status() == StatusCode::TEMPORARY_REDIRECT && !options.follow_redirect {
            if let Some(location) = redirect_target(&response) {
                tracing::debug!(%location, "following redirect");
                response = self.direct.get(location).send()?;
            } else {
                tracing::warn!("307 response without a usable Location header");
            }
        }

        let status = response.status();
        let text = response.text()?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "namenode response");

        let json = if options.expect_json {
            decode_json(&text)
        } else {
            None
        };

        Ok(Response { status, json, text })
    }
}

fn build_client(config: &ClientConfig, policy: Policy) -> Result<Client, ShellError> {
    // Ambient proxy settings must not reroute traffic away from the namenode.
    let mut builder = Client::builder().no_proxy().redirect(policy);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Resolve a redirect's `Location` against the URL that produced it.
fn redirect_target(response: &reqwest::blocking::Response) -> Option<Url> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    response.url().join(location).ok()
}

/// Parse a body as JSON; anything unparseable (including an empty body) is `None`.
fn decode_json(text: &str) -> Option<serde_json::Value> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!("namenode body is not JSON: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NamespaceClient {
        NamespaceClient::new(ClientConfig::new("namenode:50070")).unwrap()
    }

    #[test]
    fn test_url_strips_single_slashes() {
        let client = client();
        let url = client.url("/user/alice/", Operation::ListStatus, &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://namenode:50070/webhdfs/v1/user/alice?op=LISTSTATUS"
        );
    }

    #[test]
    fn test_url_for_root() {
        let client = client();
        let url = client.url("/", Operation::GetFileStatus, &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://namenode:50070/webhdfs/v1/?op=GETFILESTATUS"
        );
    }

    #[test]
    fn test_url_extra_params() {
        let client = client();
        let params = vec![("user.name".to_string(), "alice".to_string())];
        let url = client
            .url("/tmp", Operation::GetFileStatus, &params)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://namenode:50070/webhdfs/v1/tmp?op=GETFILESTATUS&user.name=alice"
        );
    }

    #[test]
    fn test_url_escapes_reserved_characters() {
        let client = client();

        let url = client.url("/data/what?", Operation::GetFileStatus, &[]).unwrap();
        assert_eq!(url.path(), "/webhdfs/v1/data/what%3F");
        assert_eq!(url.query(), Some("op=GETFILESTATUS"));

        let url = client.url("/data/a#b", Operation::GetFileStatus, &[]).unwrap();
        assert_eq!(url.path(), "/webhdfs/v1/data/a%23b");
        assert_eq!(url.fragment(), None);

        let url = client.url("/data/100%25", Operation::GetFileStatus, &[]).unwrap();
        assert_eq!(url.path(), "/webhdfs/v1/data/100%2525");
    }

    #[test]
    fn test_url_collapses_empty_segments() {
        let client = client();
        let url = client.url("//user//alice", Operation::ListStatus, &[]).unwrap();
        assert_eq!(url.path(), "/webhdfs/v1/user/alice");
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::ListStatus.to_string(), "LISTSTATUS");
        assert_eq!(format!("{}", Operation::GetFileStatus), "GETFILESTATUS");
    }

    #[test]
    fn test_url_escapes_spaces() {
        let client = client();
        let url = client.url("/my dir", Operation::ListStatus, &[]).unwrap();
        assert_eq!(url.path(), "/webhdfs/v1/my%20dir");
    }

    #[test]
    fn test_request_options_builders() {
        let options = RequestOptions::following();
        assert!(options.follow_redirect);
        assert!(options.expect_json);
        assert_eq!(options.method, Method::GET);
        assert!(options.params.is_empty());

        let defaults = RequestOptions::default();
        assert!(!defaults.follow_redirect);
    }

    #[test]
    fn test_decode_json() {
        assert!(decode_json("{\"boolean\": true}").is_some());
        assert!(decode_json("<html>oops</html>").is_none());
        assert!(decode_json("").is_none());
        assert!(decode_json("  \n").is_none());
    }
}
