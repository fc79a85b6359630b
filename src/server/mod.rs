//! Server module
//!
//! Listener setup, accept loop and per-connection serving.

mod connection;
mod listener;

pub use listener::bind;

use crate::config::Settings;
use crate::logger;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

/// Accept connections until SIGINT or SIGTERM arrives, then drain.
pub async fn serve(
    listener: TcpListener,
    settings: Arc<Settings>,
) -> Result<(), Box<dyn std::error::Error>> {
    run(listener, settings, shutdown_signal()).await
}

/// Accept connections until `shutdown` resolves.
///
/// Each accepted connection is served on its own task. When `shutdown`
/// fires, open connections stop accepting keep-alive requests, requests
/// in flight run to completion, and the function returns only after every
/// connection task has finished.
pub async fn run(
    listener: TcpListener,
    settings: Arc<Settings>,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Box<dyn std::error::Error>> {
    tokio::pin!(shutdown);

    let (conn_shutdown_tx, conn_shutdown_rx) = tokio::sync::watch::channel(false);
    let mut tasks = JoinSet::new();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        tasks.spawn(connection::serve_connection(
                            stream,
                            peer_addr,
                            Arc::clone(&settings),
                            conn_shutdown_rx.clone(),
                        ));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            // Reap finished connection tasks as they complete
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}

            () = &mut shutdown => {
                logger::log_shutdown();
                break;
            }
        }
    }

    // Drain: wind down open connections and wait for their tasks.
    // Returning earlier would drop the runtime under them and abort
    // responses mid-write.
    let _ = conn_shutdown_tx.send(true);
    while tasks.join_next().await.is_some() {}

    Ok(())
}

/// Resolve when SIGINT or SIGTERM is received.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {}
        _ = sigint.recv() => {}
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
