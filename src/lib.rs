//! Minimal static file server.
//!
//! Serves files from a fixed `web/` directory on port 3000. The request
//! path maps directly to a file under the web root, `/` is served as
//! `/index.html`, and the `Content-Type` header is inferred from the
//! file extension. Anything else is a 404.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
