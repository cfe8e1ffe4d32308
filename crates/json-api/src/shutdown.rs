//! Graceful shutdown signal handling

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// The signal that ended the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    CtrlC,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CtrlC => f.write_str("ctrl_c"),
            Self::Terminate => f.write_str("terminate"),
        }
    }
}

/// Wait for Ctrl+C or SIGTERM, then stop the server gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> Result<ShutdownSignal, ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(%signal, "shutdown signal received, draining connections");

    handle.stop_graceful(None);

    Ok(signal)
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let ctrl_c = async {
        signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok::<(), ShutdownSignalError>(())
    };

    // Only Ctrl+C is available elsewhere.
    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<(), ShutdownSignalError>>();

    tokio::select! {
        result = ctrl_c => {
            result?;
            Ok(ShutdownSignal::CtrlC)
        }
        result = terminate => {
            result?;
            Ok(ShutdownSignal::Terminate)
        }
    }
}
