//! HTTP protocol layer module
//!
//! MIME lookup and response builders, decoupled from file loading.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_500_response, build_file_response};
