//! Server module
//!
//! An owned, start/stop-able listener. Owning the running server (rather
//! than a module-level singleton) lets tests run several instances on
//! different ports and tear each one down cleanly.

mod connection;
mod listener;
pub mod signal;

pub use listener::create_reusable_listener;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::{AppState, Config};
use crate::logger;

/// A bound, not-yet-running server.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
}

/// Handle for stopping a running [`Server`].
#[derive(Clone)]
pub struct ShutdownHandle {
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    /// Ask the accept loop to stop. In-flight connections finish naturally.
    pub fn shutdown(&self) {
        self.notify.notify_one();
    }
}

impl Server {
    /// Bind the configured address.
    ///
    /// Port 0 binds an ephemeral port; use [`Server::local_addr`] to learn
    /// which. Must be called from within a tokio runtime.
    pub fn bind(config: &Config) -> std::io::Result<Self> {
        let addr = config
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let listener = listener::create_reusable_listener(addr)?;

        Ok(Self {
            listener,
            state: Arc::new(AppState::new(config)),
            shutdown: Arc::new(Notify::new()),
        })
    }

    /// The locally bound address.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Obtain a handle that stops the accept loop.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            notify: Arc::clone(&self.shutdown),
        }
    }

    /// Accept connections until the shutdown handle fires.
    ///
    /// Each accepted connection is served on its own task; requests are
    /// fully independent of one another.
    pub async fn run(self) -> std::io::Result<()> {
        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, peer_addr)) => {
                            connection::handle_connection(stream, peer_addr, Arc::clone(&self.state));
                        }
                        Err(e) => {
                            logger::log_error(&format!("Failed to accept connection: {e}"));
                        }
                    }
                }

                () = self.shutdown.notified() => {
                    if let Ok(addr) = self.listener.local_addr() {
                        logger::log_shutdown(&addr);
                    }
                    return Ok(());
                }
            }
        }
    }
}
