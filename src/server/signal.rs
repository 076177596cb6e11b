// Signal handling module
//
// SIGTERM and SIGINT stop the accept loop; in-flight connections finish
// naturally. Non-unix platforms handle Ctrl+C only.

use crate::logger;
use crate::server::ShutdownHandle;

/// Start the signal listener task (Unix)
#[cfg(unix)]
pub fn start_signal_handler(shutdown: ShutdownHandle) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => logger::log_signal("SIGTERM"),
            _ = sigint.recv() => logger::log_signal("SIGINT"),
        }

        shutdown.shutdown();
    });
}

/// Start the signal listener task (Ctrl+C fallback)
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: ShutdownHandle) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_signal("Ctrl+C");
            shutdown.shutdown();
        }
    });
}
