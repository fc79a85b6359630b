//! Logger module
//!
//! Access and error logging for the server. Access lines go to stdout,
//! errors and warnings to stderr. There is no log file configuration.

mod format;

pub use format::{AccessLogEntry, AccessLogFormat};

use crate::config::Settings;
use std::net::SocketAddr;

/// Access log format, fixed for the process lifetime.
const ACCESS_LOG_FORMAT: AccessLogFormat = AccessLogFormat::Common;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, settings: &Settings) {
    write_info("======================================");
    write_info("Static file server started");
    write_info(&format!("Serving directory: {}", settings.web_root.display()));
    write_info(&format!("Listening on: http://{addr}"));
    write_info("======================================");
}

pub fn log_shutdown() {
    write_info("\n[Shutdown] Signal received, stopping accept loop");
}

/// Log one formatted access line per handled request
pub fn log_access(entry: &AccessLogEntry) {
    write_info(&entry.format(ACCESS_LOG_FORMAT));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
