//! Error types for ignoregen-cli

use ignoregen_core::BlockError;
use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from ignoregen-core
    #[error(transparent)]
    Core(#[from] ignoregen_core::Error),

    /// Error from ignoregen-fs
    #[error(transparent)]
    Fs(#[from] ignoregen_fs::Error),

    /// The ignore-file differs from what `generate` would write
    #[error("{} is out of date", path.display())]
    OutOfDate { path: PathBuf },
}

impl CliError {
    /// Per-block expansion errors, printed one per line under the summary.
    pub fn block_errors(&self) -> &[BlockError] {
        match self {
            Self::Core(e) => e.block_errors(),
            _ => &[],
        }
    }
}
