use thiserror::Error;

/// Errors raised while building core lookup data.
#[derive(Debug, Error)]
pub enum TitleError {
    /// Region tables are keyed by a single uppercase ASCII letter
    #[error("Invalid region code {0:?}: expected a single letter A-Z")]
    InvalidRegionCode(String),
}

impl TitleError {
    pub fn invalid_region_code(code: impl Into<String>) -> Self {
        Self::InvalidRegionCode(code.into())
    }
}
