//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] infra_config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Master data error
    #[error(transparent)]
    MasterData(#[from] infra_master::MasterDataError),

    /// Rate or conversion error
    #[error(transparent)]
    Feed(#[from] adapter_feeds::FeedError),

    /// Holiday file error
    #[error("Holiday file error: {0}")]
    Loader(#[from] adapter_loader::LoaderError),
}
