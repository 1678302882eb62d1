//! Directory listings and single-entry status lookups.

use hdfsh_api::{Entry, FileStatusResponse, ListStatusResponse, RemoteException};
use reqwest::StatusCode;

use crate::client::{NamespaceClient, Operation, RequestOptions, Response};
use crate::error::ShellError;

/// Status of a single path, both typed and as the raw JSON object the
/// namenode sent (so `stat` can show fields this crate does not model).
#[derive(Debug, Clone)]
pub struct FileStatus {
    pub entry: Entry,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Fetches namespace metadata through a [`NamespaceClient`].
#[derive(Clone, Copy)]
pub struct DirectoryLister<'a> {
    client: &'a NamespaceClient,
}

impl<'a> DirectoryLister<'a> {
    pub fn new(client: &'a NamespaceClient) -> Self {
        Self { client }
    }

    /// List the entries of the directory at `path`, in service order.
    ///
    /// Listing a file yields that file's own status.
    pub fn list(&self, path: &str) -> Result<Vec<Entry>, ShellError> {
        let response =
            self.client
                .request(path, Operation::ListStatus, &RequestOptions::following())?;
        let body = expect_ok(response)?;

        let listing: ListStatusResponse =
            serde_json::from_value(body).map_err(|e| ShellError::Protocol {
                status: StatusCode::OK.as_u16(),
                message: format!("malformed LISTSTATUS response: {}", e),
            })?;
        Ok(listing.file_statuses.file_status)
    }

    /// Fetch the status of `path` itself.
    pub fn status(&self, path: &str) -> Result<FileStatus, ShellError> {
        let response = self.client.request(
            path,
            Operation::GetFileStatus,
            &RequestOptions::following(),
        )?;
        let body = expect_ok(response)?;

        let malformed = |detail: String| ShellError::Protocol {
            status: StatusCode::OK.as_u16(),
            message: format!("malformed GETFILESTATUS response: {}", detail),
        };

        let fields = match body.get("FileStatus") {
            Some(serde_json::Value::Object(fields)) => fields.clone(),
            _ => return Err(malformed("missing FileStatus object".to_string())),
        };
        let parsed: FileStatusResponse =
            serde_json::from_value(body).map_err(|e| malformed(e.to_string()))?;

        Ok(FileStatus {
            entry: parsed.file_status,
            fields,
        })
    }
}

/// Require a 200 with a JSON body; otherwise classify the failure.
fn expect_ok(response: Response) -> Result<serde_json::Value, ShellError> {
    let status = response.status.as_u16();

    if response.status == StatusCode::OK {
        return response.json.ok_or_else(|| ShellError::Protocol {
            status,
            message: "response body is not valid JSON".to_string(),
        });
    }

    match response.json.as_ref().and_then(RemoteException::from_body) {
        Some(exception) => Err(ShellError::Remote(exception)),
        None => Err(ShellError::Protocol {
            status,
            message: "no error details in response".to_string(),
        }),
    }
}
