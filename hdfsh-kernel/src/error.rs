//! Shell error types.

use hdfsh_api::RemoteException;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// The HTTP exchange itself failed (refused, DNS, timeout).
    #[error("request to namenode failed")]
    Transport(#[from] reqwest::Error),

    #[error("invalid namenode url: {0}")]
    Url(#[from] url::ParseError),

    /// The base URL cannot take path segments.
    #[error("namenode url cannot carry a path: {0}")]
    Endpoint(String),

    /// The namenode answered with a `RemoteException`.
    #[error("{0}")]
    Remote(RemoteException),

    /// Unexpected status or an unusable body.
    #[error("namenode returned HTTP {status}: {message}")]
    Protocol { status: u16, message: String },

    #[error("{0}")]
    Usage(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),
}
