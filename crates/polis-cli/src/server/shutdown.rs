//! Graceful shutdown signal handling.

use std::fmt;
use std::time::Duration;

use crate::TRACING_TARGET_SERVER_SHUTDOWN;

/// Process signal that started the shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => f.write_str("SIGINT"),
            Self::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupt() -> ShutdownSignal {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            %error,
            "Could not listen for Ctrl-C"
        );
        std::future::pending::<()>().await;
    }

    ShutdownSignal::Interrupt
}

#[cfg(unix)]
async fn terminate() -> ShutdownSignal {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                %error,
                "Could not listen for SIGTERM"
            );
            std::future::pending::<()>().await;
        }
    }

    ShutdownSignal::Terminate
}

#[cfg(not(unix))]
async fn terminate() -> ShutdownSignal {
    std::future::pending().await
}

/// Waits for the first of SIGINT or SIGTERM.
pub async fn shutdown_signal(shutdown_timeout: Duration) -> ShutdownSignal {
    let received = tokio::select! {
        signal = interrupt() => signal,
        signal = terminate() => signal,
    };

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        signal = %received,
        drain_timeout_secs = shutdown_timeout.as_secs(),
        "Stopping, waiting for in-flight requests"
    );

    received
}
