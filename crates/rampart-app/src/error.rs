//! Errors surfaced by the host layer.

use thiserror::Error;

use rampart_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tick rate must be greater than zero")]
    ZeroTickRate,
    #[error("game loop thread panicked")]
    LoopPanicked,
}
