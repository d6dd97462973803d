//! Reassembly of expanded units into lines.

use crate::error::BlockError;
use crate::lines::trim_last_empty_lines;
use crate::parser::Unit;

/// Either every line of the output or one error per failed block.
pub type JoinResult = std::result::Result<Vec<String>, Vec<BlockError>>;

/// The outcome of expanding one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// The unit after expansion. Plain lines are always `Expanded`.
    Expanded(Unit),
    /// The block could not be expanded; `unit` keeps its literal content.
    Failed { unit: Unit, error: BlockError },
}

impl Expansion {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn error(&self) -> Option<&BlockError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Expanded(_) => None,
        }
    }

    pub fn unit(&self) -> &Unit {
        match self {
            Self::Expanded(unit) | Self::Failed { unit, .. } => unit,
        }
    }
}

/// Joins expansion outcomes into the final lines.
///
/// If any outcome failed, returns every error in input order and no lines.
/// Otherwise the units are flattened with [`flatten`].
pub fn join(outcomes: Vec<Expansion>) -> JoinResult {
    let errors: Vec<BlockError> = outcomes
        .iter()
        .filter_map(|outcome| outcome.error().cloned())
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(flatten(outcomes.into_iter().map(|outcome| match outcome {
        Expansion::Expanded(unit) | Expansion::Failed { unit, .. } => unit,
    })))
}

/// Flattens units into lines.
///
/// A block becomes its header, its content and one empty separator line.
/// Trailing empty lines are then collapsed to at most one.
///
/// # Example
/// ```
/// use ignoregen_blocks::parser::{Block, Unit};
/// use ignoregen_blocks::writer::flatten;
///
/// let lines = flatten(vec![
///     Unit::Line(".vscode/".to_string()),
///     Unit::Block(Block::new("# ignoregen node", vec!["node_modules/".to_string()])),
/// ]);
/// assert_eq!(lines, vec![".vscode/", "# ignoregen node", "node_modules/", ""]);
/// ```
pub fn flatten<I>(units: I) -> Vec<String>
where
    I: IntoIterator<Item = Unit>,
{
    let mut lines = Vec::new();
    for unit in units {
        match unit {
            Unit::Line(line) => lines.push(line),
            Unit::Block(block) => {
                lines.push(block.header);
                lines.extend(block.content);
                lines.push(String::new());
            }
        }
    }
    trim_last_empty_lines(lines)
}
