//! Filesystem helpers for ignoregen
//!
//! Provides line-oriented reads, atomic writes and format-detecting config loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use constants::ProjectFile;
pub use error::{Error, Result};
