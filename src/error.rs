//! Fatal error types
//!
//! Only setup can fail: the entity pool running dry, a missing asset, or a
//! malformed config file. The frame loop itself has no error path.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("No more free entities (pool capacity {capacity})")]
    PoolExhausted { capacity: usize },

    #[error("Failed loading {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Log an unrecoverable error and abort the process.
///
/// There is no retry or degraded mode; callers use this only before the
/// frame loop starts.
pub fn fatal(err: GameError) -> ! {
    log::error!("fatal: {}", err);
    std::process::abort()
}
