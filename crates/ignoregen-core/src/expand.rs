//! Block expansion.
//!
//! Every directive block is expanded independently. All fetches are started
//! together and awaited as a group; the outcomes keep the position of their
//! unit, whatever order the fetches finish in. A failing block never cancels
//! the others, so the caller sees every error at once.

use crate::fetch::{TemplateSource, build_url};
use crate::options::resolve;
use futures::future::join_all;
use ignoregen_blocks::{Block, BlockError, Expansion, PartialOptions, Unit, parse_directive};

/// Expand every block in `units`, fetching templates from `source`.
///
/// Plain lines pass through as [`Expansion::Expanded`].
pub async fn expand(
    units: Vec<Unit>,
    caller: &PartialOptions,
    source: &dyn TemplateSource,
) -> Vec<Expansion> {
    let pending = units
        .into_iter()
        .map(|unit| expand_unit(unit, caller, source));
    let outcomes = join_all(pending).await;

    let blocks = outcomes.iter().filter(|o| o.unit().is_block()).count();
    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    tracing::info!(blocks, failed, "Expanded directive blocks");

    outcomes
}

async fn expand_unit(
    unit: Unit,
    caller: &PartialOptions,
    source: &dyn TemplateSource,
) -> Expansion {
    let block = match unit {
        Unit::Line(line) => return Expansion::Expanded(Unit::Line(line)),
        Unit::Block(block) => block,
    };

    match fetch_block(&block, caller, source).await {
        Ok(content) => Expansion::Expanded(Unit::Block(Block { content, ..block })),
        Err(error) => {
            tracing::warn!(header = %block.header, %error, "Failed to expand block");
            Expansion::Failed {
                unit: Unit::Block(block),
                error,
            }
        }
    }
}

async fn fetch_block(
    block: &Block,
    caller: &PartialOptions,
    source: &dyn TemplateSource,
) -> Result<Vec<String>, BlockError> {
    let header = &block.header;
    let directive =
        parse_directive(header).map_err(|e| BlockError::from_directive(header.clone(), e))?;

    let options = resolve(caller, &directive.options);
    let url = build_url(&directive.name, &options).map_err(|e| BlockError::InvalidUrl {
        header: header.clone(),
        src: options.src.clone(),
        message: e.to_string(),
    })?;

    tracing::debug!(name = %directive.name, %url, "Fetching template");

    source.fetch(&url).await.map_err(|e| BlockError::Fetch {
        header: header.clone(),
        url: url.to_string(),
        status: e.status,
        message: e.message,
    })
}
