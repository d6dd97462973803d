//! The extract -> expand -> join pipeline.

use crate::fetch::{TemplateSource, build_url};
use crate::options::OptionSet;
use crate::{Error, Result, expand};
use ignoregen_blocks::{JoinResult, PartialOptions, extract, join};
use url::Url;

/// Expand directive blocks in `lines` with templates from `source`.
///
/// Returns the output lines, or one error per failed block in input order.
/// Output and errors are never mixed.
pub async fn generate<L: AsRef<str>>(
    lines: &[L],
    caller: &PartialOptions,
    source: &dyn TemplateSource,
) -> JoinResult {
    let units = extract(lines);
    let outcomes = expand(units, caller, source).await;
    join(outcomes)
}

/// A template source bound to the caller's option overrides.
#[derive(Debug)]
pub struct Pipeline<S> {
    source: S,
    overrides: PartialOptions,
}

impl<S: TemplateSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            overrides: PartialOptions::default(),
        }
    }

    /// Caller-level overrides, applied under each directive's own options.
    pub fn with_overrides(mut self, overrides: PartialOptions) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run the pipeline, keeping per-block errors separate.
    pub async fn generate<L: AsRef<str>>(&self, lines: &[L]) -> JoinResult {
        generate(lines, &self.overrides, &self.source).await
    }

    /// Run the pipeline, folding per-block errors into [`Error::Expansion`].
    pub async fn run<L: AsRef<str>>(&self, lines: &[L]) -> Result<Vec<String>> {
        self.generate(lines).await.map_err(Error::Expansion)
    }

    /// The URL a directive without inline options would fetch for `name`.
    pub fn template_url(&self, name: &str) -> Result<Url> {
        let options = OptionSet::default().apply(&self.overrides);
        build_url(name, &options).map_err(|e| Error::InvalidSource {
            src: options.src.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MemoryTemplateSource;
    use crate::options::DEFAULT_SRC;

    #[tokio::test]
    async fn test_empty_input() {
        let pipeline = Pipeline::new(MemoryTemplateSource::new());
        assert_eq!(pipeline.generate::<&str>(&[]).await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_single_empty_line() {
        let pipeline = Pipeline::new(MemoryTemplateSource::new());
        assert_eq!(pipeline.generate(&[""]).await, Ok(vec![String::new()]));
    }

    #[tokio::test]
    async fn test_run_wraps_block_errors() {
        let pipeline = Pipeline::new(MemoryTemplateSource::new());
        let err = pipeline.run(&["# ignoregen nope", ""]).await.unwrap_err();
        assert_eq!(err.block_errors().len(), 1);
        assert_eq!(err.block_errors()[0].header(), "# ignoregen nope");
    }

    #[test]
    fn test_template_url_uses_default() {
        let pipeline = Pipeline::new(MemoryTemplateSource::new());
        assert_eq!(
            pipeline.template_url("node").unwrap().as_str(),
            format!("{DEFAULT_SRC}node.ignore")
        );
    }

    #[test]
    fn test_template_url_uses_overrides() {
        let pipeline = Pipeline::new(MemoryTemplateSource::new())
            .with_overrides(PartialOptions::with_src("https://example.com/ignores/"));
        assert_eq!(
            pipeline.template_url("env").unwrap().as_str(),
            "https://example.com/ignores/env.ignore"
        );
    }

    #[test]
    fn test_template_url_invalid_src() {
        let pipeline = Pipeline::new(MemoryTemplateSource::new())
            .with_overrides(PartialOptions::with_src("relative/"));
        assert!(matches!(
            pipeline.template_url("env"),
            Err(Error::InvalidSource { .. })
        ));
    }
}
