use std::sync::Arc;

use webserve::config::Settings;
use webserve::{logger, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Arc::new(Settings::new());
    let addr = settings.socket_addr()?;

    let listener = server::bind(addr)?;
    logger::log_server_start(&addr, &settings);

    server::serve(listener, settings).await
}
