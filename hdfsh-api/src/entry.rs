//! Namespace entries as reported by the namenode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Metadata about a remote file or directory (one WebHDFS `FileStatus`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Final path segment. Empty when the status describes the queried path itself.
    #[serde(rename = "pathSuffix", default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub permission: Permission,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub length: u64,
    #[serde(default)]
    pub replication: u32,
    /// Epoch milliseconds, 0 when the namenode does not track it.
    #[serde(default)]
    pub access_time: u64,
    #[serde(default)]
    pub modification_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_num: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_policy: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Body of a `LISTSTATUS` response: `{"FileStatuses":{"FileStatus":[...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListStatusResponse {
    #[serde(rename = "FileStatuses")]
    pub file_statuses: FileStatuses,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileStatuses {
    #[serde(rename = "FileStatus", default)]
    pub file_status: Vec<Entry>,
}

/// Body of a `GETFILESTATUS` response: `{"FileStatus":{...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileStatusResponse {
    #[serde(rename = "FileStatus")]
    pub file_status: Entry,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermissionError {
    #[error("empty permission")]
    Empty,
    #[error("invalid octal permission: {0}")]
    Invalid(String),
}

/// POSIX-style permission bits, carried on the wire as an octal string (`"755"`).
///
/// A leading fourth digit (sticky bit, as in `"1777"`) is kept but only the
/// low nine bits take part in `rwx` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permission(u16);

impl Permission {
    /// Parse an octal string such as `"755"` or `"1777"`.
    pub fn from_octal(text: &str) -> Result<Self, PermissionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PermissionError::Empty);
        }
        if text.len() > 4 {
            return Err(PermissionError::Invalid(text.to_string()));
        }
        u16::from_str_radix(text, 8)
            .map(Permission)
            .map_err(|_| PermissionError::Invalid(text.to_string()))
    }

    /// The owner, group and other digits, each in `0..=7`.
    pub fn digits(self) -> [u8; 3] {
        [
            ((self.0 >> 6) & 0o7) as u8,
            ((self.0 >> 3) & 0o7) as u8,
            (self.0 & 0o7) as u8,
        ]
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03o}", self.0)
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Namenodes send a string; some gateways send the digits as a number.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Digits(u64),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Digits(n) => n.to_string(),
        };
        Permission::from_octal(&text).map_err(serde::de::Error::custom)
    }
}
