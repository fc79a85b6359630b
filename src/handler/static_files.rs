//! Static file serving module
//!
//! Maps request paths to files under the web root, loads them and builds
//! the response. Contents are read fresh on every request; nothing is
//! cached.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve the file addressed by `path` from the web root.
///
/// The path is used as the client sent it, with only the leading slash
/// trimmed before joining. Missing files answer 404 with body `Not found`;
/// a read fault on an existing file answers 500.
pub async fn serve(web_root: &Path, path: &str) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve(web_root, path) else {
        return http::build_404_response();
    };

    match fs::read(&file_path).await {
        Ok(content) => {
            // Content type comes from the request path, not the resolved
            // file name
            let content_type = mime::content_type_for_path(path);
            http::build_file_response(Bytes::from(content), content_type)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            http::build_500_response()
        }
    }
}

/// Resolve a request path to a regular file under the web root.
///
/// Returns `None` when the candidate does not exist, is not a regular
/// file, or escapes the web root through `..` segments.
fn resolve(web_root: &Path, path: &str) -> Option<PathBuf> {
    let candidate = web_root.join(path.trim_start_matches('/'));

    let root = web_root.canonicalize().ok()?;
    // canonicalize also fails for files that do not exist, which covers
    // the plain 404 case
    let resolved = candidate.canonicalize().ok()?;

    if !resolved.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            resolved.display()
        ));
        return None;
    }

    resolved.is_file().then_some(candidate)
}
