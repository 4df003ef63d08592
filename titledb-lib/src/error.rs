use thiserror::Error;

/// Errors that abort a title job.
#[derive(Debug, Error)]
pub enum JobError {
    /// I/O error reading inputs or writing outputs
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Source data could not be parsed (malformed XML or JSON)
    #[error("{path}: {source}")]
    Data {
        path: String,
        source: titledb_dat::DatError,
    },

    /// Translation or region table could not be loaded
    #[error(transparent)]
    Catalog(#[from] titledb_catalog::CatalogError),
}

impl JobError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn data(path: &std::path::Path, source: titledb_dat::DatError) -> Self {
        Self::Data {
            path: path.display().to_string(),
            source,
        }
    }
}
