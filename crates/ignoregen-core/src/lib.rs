//! Template expansion pipeline for ignoregen.
//!
//! Wires the pure block model from `ignoregen-blocks` to option resolution and
//! template fetching:
//!
//! ```text
//! lines -> extract -> expand (concurrent fetches) -> join -> lines | errors
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ignoregen_core::{HttpTemplateSource, Pipeline};
//!
//! let pipeline = Pipeline::new(HttpTemplateSource::new()?);
//! let lines = pipeline.run(&["# ignoregen node", ""]).await?;
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod fetch;
pub mod options;
pub mod pipeline;

pub use config::{ConfigResolver, RcConfig};
pub use error::{Error, Result};
pub use expand::expand;
pub use fetch::{
    FetchError, HttpConfig, HttpTemplateSource, MemoryTemplateSource, TemplateSource, build_url,
};
pub use ignoregen_blocks::{BlockError, JoinResult, PartialOptions};
pub use options::{DEFAULT_SRC, OptionSet, resolve};
pub use pipeline::{Pipeline, generate};
