//! In-process mock namenode for integration tests.
//!
//! Serves a small in-memory namespace over the WebHDFS REST shape using
//! axum on a background tokio runtime, so the blocking client under test can
//! run on the test thread.

#![allow(dead_code)]

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value as Json, json};
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// A millisecond timestamp well in the past (2019-03-14 09:30 UTC).
pub const OLD_TIME: u64 = 1_552_555_800_000;

#[derive(Debug, Clone)]
struct Node {
    kind: &'static str,
    permission: &'static str,
    length: u64,
    replication: u32,
    access_time: u64,
}

impl Node {
    fn status(&self, name: &str) -> Json {
        let block_size: u64 = if self.kind == "FILE" { 134_217_728 } else { 0 };
        json!({
            "pathSuffix": name,
            "type": self.kind,
            "permission": self.permission,
            "owner": "hdfs",
            "group": "supergroup",
            "length": self.length,
            "replication": self.replication,
            "accessTime": self.access_time,
            "modificationTime": self.access_time,
            "blockSize": block_size,
        })
    }
}

/// Builder for the namespace the mock serves. `/` always exists.
#[derive(Debug, Clone)]
pub struct Namespace {
    nodes: BTreeMap<String, Node>,
    canned: HashMap<String, (u16, String)>,
}

impl Namespace {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            "/".to_string(),
            Node {
                kind: "DIRECTORY",
                permission: "755",
                length: 0,
                replication: 0,
                access_time: 0,
            },
        );
        Self {
            nodes,
            canned: HashMap::new(),
        }
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.nodes.insert(
            path.to_string(),
            Node {
                kind: "DIRECTORY",
                permission: "755",
                length: 0,
                replication: 0,
                access_time: 0,
            },
        );
        self
    }

    pub fn file(mut self, path: &str, length: u64) -> Self {
        self.nodes.insert(
            path.to_string(),
            Node {
                kind: "FILE",
                permission: "644",
                length,
                replication: 3,
                access_time: OLD_TIME,
            },
        );
        self
    }

    /// Answer every request for `path` with a fixed status and body.
    pub fn canned(mut self, path: &str, status: u16, body: &str) -> Self {
        self.canned
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    fn children(&self, dir: &str) -> Vec<Json> {
        self.nodes
            .iter()
            .filter(|(path, _)| path.as_str() != "/" && parent_of(path) == dir)
            .map(|(path, node)| node.status(path.rsplit('/').next().unwrap_or("")))
            .collect()
    }
}

fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "/",
    }
}

fn normalize(rest: &str) -> String {
    let trimmed = rest.trim_matches('/');
    format!("/{}", trimmed)
}

struct Shared {
    namespace: Namespace,
    log: Mutex<Vec<String>>,
}

/// A running mock namenode.
pub struct MockNamenode {
    pub addr: SocketAddr,
    shared: Arc<Shared>,
}

impl MockNamenode {
    pub fn start(namespace: Namespace) -> Self {
        let shared = Arc::new(Shared {
            namespace,
            log: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .fallback(handle)
            .with_state(shared.clone());
        let addr = spawn_server(move |_| router);
        Self { addr, shared }
    }

    /// `host:port` to hand to the client.
    pub fn endpoint(&self) -> String {
        self.addr.to_string()
    }

    /// Every request URI received so far.
    pub fn requests(&self) -> Vec<String> {
        self.shared.log.lock().unwrap().clone()
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    shared.log.lock().unwrap().push(uri.to_string());

    let Some(rest) = uri.path().strip_prefix("/webhdfs/v1") else {
        return (StatusCode::NOT_FOUND, "not a webhdfs url").into_response();
    };
    let path = match urlencoding::decode(rest) {
        Ok(decoded) => normalize(&decoded),
        Err(_) => return (StatusCode::BAD_REQUEST, "bad path encoding").into_response(),
    };
    let namespace = &shared.namespace;

    if let Some((status, body)) = namespace.canned.get(&path) {
        let status = StatusCode::from_u16(*status).unwrap();
        return (status, body.clone()).into_response();
    }

    let Some(node) = namespace.nodes.get(&path) else {
        return file_not_found(&path);
    };

    match params.get("op").map(String::as_str) {
        Some("GETFILESTATUS") => axum::Json(json!({ "FileStatus": node.status("") })).into_response(),
        Some("LISTSTATUS") => {
            let statuses = if node.kind == "DIRECTORY" {
                namespace.children(&path)
            } else {
                vec![node.status("")]
            };
            axum::Json(json!({ "FileStatuses": { "FileStatus": statuses } })).into_response()
        }
        other => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "RemoteException": {
                    "exception": "IllegalArgumentException",
                    "javaClassName": "java.lang.IllegalArgumentException",
                    "message": format!("Invalid value for webhdfs parameter \"op\": {:?}", other),
                }
            })),
        )
            .into_response(),
    }
}

fn file_not_found(path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({
            "RemoteException": {
                "exception": "FileNotFoundException",
                "javaClassName": "java.io.FileNotFoundException",
                "message": format!("File does not exist: {}", path),
            }
        })),
    )
        .into_response()
}

/// Bind a local port, build the router (which may need the address) and
/// serve it on a background runtime. Returns once the socket is listening.
pub fn spawn_server<F>(make_router: F) -> SocketAddr
where
    F: FnOnce(SocketAddr) -> Router,
{
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock namenode");
    listener.set_nonblocking(true).expect("nonblocking listener");
    let addr = listener.local_addr().expect("local addr");
    let router = make_router(addr);

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, router).await.expect("serve");
        });
    });

    addr
}

/// An address nothing is listening on.
pub fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr.to_string()
}
