//! Block extraction.
//!
//! Groups the lines of an ignore-file into [`Unit`]s. A directive claims every
//! line after it up to the next empty line; that empty line terminates the
//! block and is consumed with it.

use crate::directive::is_directive;
use crate::lines::is_empty_line;

/// A directive comment and the lines it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The directive comment, verbatim.
    pub header: String,
    /// Literal lines before expansion, fetched template lines after.
    pub content: Vec<String>,
}

impl Block {
    pub fn new(header: impl Into<String>, content: Vec<String>) -> Self {
        Self {
            header: header.into(),
            content,
        }
    }
}

/// One element of an ignore-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    /// A line outside any directive block, passed through untouched.
    Line(String),
    /// A directive block.
    Block(Block),
}

impl Unit {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Block(block) => Some(block),
            Self::Line(_) => None,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// Splits lines into plain-line and block units in a single pass.
///
/// For a directive at index `i`, the block content is every line strictly
/// between `i` and the next empty line. The cursor then moves past the header,
/// the content and the terminator. Without a terminator the block runs to the
/// end of input.
///
/// # Example
/// ```
/// use ignoregen_blocks::parser::{extract, Block, Unit};
///
/// let units = extract(&["# ignoregen env", ".env*", ""]);
/// assert_eq!(
///     units,
///     vec![Unit::Block(Block::new("# ignoregen env", vec![".env*".to_string()]))]
/// );
/// ```
pub fn extract<S: AsRef<str>>(lines: &[S]) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor].as_ref();

        if !is_directive(line) {
            units.push(Unit::Line(line.to_string()));
            cursor += 1;
            continue;
        }

        let rest = &lines[cursor + 1..];
        let len = rest
            .iter()
            .position(|l| is_empty_line(l.as_ref()))
            .unwrap_or(rest.len());
        let content = rest[..len].iter().map(|l| l.as_ref().to_string()).collect();

        units.push(Unit::Block(Block::new(line, content)));
        cursor += len + 2;
    }

    tracing::trace!(
        lines = lines.len(),
        units = units.len(),
        blocks = units.iter().filter(|u| u.is_block()).count(),
        "Extracted units"
    );

    units
}
