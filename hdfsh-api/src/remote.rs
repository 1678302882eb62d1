//! The namenode's structured error payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `RemoteException` as returned in WebHDFS error bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteException {
    #[serde(default)]
    pub exception: String,
    #[serde(default)]
    pub java_class_name: String,
    #[serde(default)]
    pub message: String,
}

/// Wrapper object: `{"RemoteException":{...}}`.
#[derive(Debug, Clone, Deserialize)]
struct RemoteExceptionBody {
    #[serde(rename = "RemoteException")]
    remote_exception: RemoteException,
}

impl RemoteException {
    /// Extract the exception from a decoded error body, if it has one.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        RemoteExceptionBody::deserialize(body)
            .ok()
            .map(|b| b.remote_exception)
    }
}

impl fmt::Display for RemoteException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exception {} in {}: {}",
            self.exception, self.java_class_name, self.message
        )
    }
}

impl std::error::Error for RemoteException {}
