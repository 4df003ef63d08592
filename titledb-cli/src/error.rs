use thiserror::Error;

use titledb_lib::JobError;
use titledb_lib::catalog::CatalogError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A title job failed
    #[error(transparent)]
    Job(#[from] JobError),

    /// Translation or region table could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Lookup found nothing
    #[error("Title not found: {0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
