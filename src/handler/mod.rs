//! Request handling module
//!
//! Entry point for HTTP request processing: rewrites the root path and
//! dispatches to the static file responder.

pub mod static_files;

use crate::config::Settings;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// Any method is accepted; only the URI path decides the response.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    settings: Arc<Settings>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    // "/" is served as the index document
    let file_path = if path == "/" {
        settings.index_file.as_str()
    } else {
        path.as_str()
    };

    let response = static_files::serve(&settings.web_root, file_path).await;

    let mut entry = AccessLogEntry::new(peer_addr.to_string(), method, path);
    entry.http_version = http_version_str(req.version()).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    logger::log_access(&entry);

    Ok(response)
}

fn http_version_str(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}
