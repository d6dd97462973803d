//! Error types for ignoregen-core

use ignoregen_blocks::BlockError;

/// Result type for ignoregen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ignoregen-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] ignoregen_fs::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid template source \"{src}\": {message}")]
    InvalidSource { src: String, message: String },

    #[error("{} directive block(s) failed to expand", .0.len())]
    Expansion(Vec<BlockError>),
}

impl Error {
    /// Per-block errors, when the pipeline failed to expand.
    pub fn block_errors(&self) -> &[BlockError] {
        match self {
            Self::Expansion(errors) => errors,
            _ => &[],
        }
    }
}
