use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("dispatcher error: {0}")]
    Dispatch(#[from] jsdispatch::Error),
    #[error("failed to set Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error("listener thread exited without reporting an error")]
    ListenerLost,
}
