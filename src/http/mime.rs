//! MIME type detection module
//!
//! Returns the Content-Type for a request path based on the substring
//! after the last `.`. The table is fixed for the process lifetime and
//! consulted read-only.

/// Fallback for unknown or missing extensions.
pub const FALLBACK: &str = "application/octet-stream";

/// Get MIME Content-Type for a request path
///
/// # Examples
/// ```
/// use webserve::http::mime::content_type_for_path;
/// assert_eq!(content_type_for_path("/index.html"), "text/html; charset=utf-8");
/// assert_eq!(content_type_for_path("/data.bin"), "application/octet-stream");
/// ```
#[must_use]
pub fn content_type_for_path(path: &str) -> &'static str {
    match path.rsplit_once('.') {
        Some((_, ext)) => content_type(ext),
        None => FALLBACK,
    }
}

/// Get MIME Content-Type for a file extension (without the dot)
///
/// The lookup is case-sensitive: `HTML` is not `html`.
#[must_use]
pub fn content_type(extension: &str) -> &'static str {
    match extension {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "wasm" => "application/wasm",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        _ => FALLBACK,
    }
}
