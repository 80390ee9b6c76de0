//! Collector subprocess invocation.
//!
//! # Data Flow
//! ```text
//! metrics handler
//!     → run() spawns the collector (resolved via $PATH)
//!     → child stdout collected until exit
//!     → exit 0: Ok(stdout bytes)
//!     → spawn error / non-zero exit / timeout: Err(CollectorError)
//! ```
//!
//! # Design Decisions
//! - stdin is null, stdout is piped, stderr is inherited so collector
//!   diagnostics land in the exporter's own stderr rather than the
//!   HTTP response
//! - No timeout unless configured: a hung collector blocks its request
//!   indefinitely, matching the contract of the stock collector
//! - Every failure collapses to one HTTP 500 at the handler; variants
//!   exist only so logs can name the cause

use crate::config::CollectorConfig;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Ways a collector invocation can fail.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The child could not be spawned or its output could not be read
    /// (binary missing, permission denied, pipe error).
    #[error("failed to run collector: {0}")]
    Spawn(#[from] std::io::Error),

    /// The child ran but exited unsuccessfully. `code` is `None` when
    /// the child was killed by a signal.
    #[error("collector exited with status {code:?}")]
    NonZeroExit { code: Option<i32> },

    /// The configured deadline elapsed before the child exited.
    #[error("collector did not finish within {secs}s")]
    TimedOut { secs: u64 },
}

/// Run the collector once and capture its standard output.
///
/// Blocks (asynchronously) until the child exits or, if configured,
/// the timeout fires. The returned bytes are the child's stdout
/// verbatim, with no parsing or transformation.
pub async fn run(config: &CollectorConfig) -> Result<Vec<u8>, CollectorError> {
    let mut command = Command::new(&config.command);
    command
        .args(&config.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let output = match config.timeout_secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), command.output())
            .await
            .map_err(|_| CollectorError::TimedOut { secs })??,
        None => command.output().await?,
    };

    if !output.status.success() {
        return Err(CollectorError::NonZeroExit {
            code: output.status.code(),
        });
    }

    Ok(output.stdout)
}
