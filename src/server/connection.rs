// Connection handling module
// Serves a single accepted TCP connection over HTTP/1.1

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;

use crate::config::Settings;
use crate::handler;
use crate::logger;

/// Serve an accepted connection until it completes or shutdown is
/// requested.
///
/// On shutdown the connection stops accepting keep-alive requests,
/// finishes the request in flight and closes.
pub async fn serve_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    settings: Arc<Settings>,
    mut shutdown: watch::Receiver<bool>,
) {
    let io = TokioIo::new(stream);

    let mut builder = http1::Builder::new();
    builder.keep_alive(true);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| {
            let settings = Arc::clone(&settings);
            async move { handler::handle_request(req, peer_addr, settings).await }
        }),
    );
    tokio::pin!(conn);

    tokio::select! {
        result = conn.as_mut() => {
            if let Err(err) = result {
                logger::log_connection_error(&err);
            }
            return;
        }
        _ = shutdown.changed() => {
            conn.as_mut().graceful_shutdown();
        }
    }

    // Shutdown was requested: let the in-flight request finish, then the
    // connection closes
    if let Err(err) = conn.await {
        logger::log_connection_error(&err);
    }
}
