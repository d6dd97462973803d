//! Directive parsing, block extraction and reassembly for ignoregen.
//!
//! An ignore-file is a sequence of lines. Some of them are directive comments:
//!
//! ```text
//! # ignoregen node
//! node_modules/
//!
//! # ignoregen env {"src": "https://example.com/templates/"}
//! .env*
//! ```
//!
//! A directive owns the lines that follow it up to the next blank line. This
//! crate splits a file into [`Unit`]s ([`parser::extract`]) and flattens expanded
//! units back into lines ([`writer::join`]). Fetching template content is not
//! done here; see `ignoregen-core`.

pub mod directive;
pub mod error;
pub mod lines;
pub mod parser;
pub mod writer;

pub use directive::{Directive, PartialOptions, is_directive, parse_directive};
pub use error::{BlockError, DirectiveError};
pub use lines::{cut_empty_lines, is_empty_line, trim_last_empty_lines};
pub use parser::{Block, Unit, extract};
pub use writer::{Expansion, JoinResult, flatten, join};
