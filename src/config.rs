//! Process-wide settings.
//!
//! The server is deliberately configuration-free: port, web root and index
//! document are fixed constants. No config file, environment variable or
//! CLI flag is consumed.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Address the server binds to.
pub const HOST: &str = "127.0.0.1";
/// TCP port the server listens on.
pub const PORT: u16 = 3000;
/// Directory files are served from, relative to the working directory.
pub const WEB_ROOT: &str = "web";
/// Document served for requests to `/`.
pub const INDEX_FILE: &str = "/index.html";

/// Immutable settings shared across all connections.
///
/// Constructed once at startup and never mutated afterwards, so it can be
/// read concurrently without synchronization.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub web_root: PathBuf,
    pub index_file: String,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            web_root: PathBuf::from(WEB_ROOT),
            index_file: INDEX_FILE.to_string(),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
