//! Option layering.
//!
//! The effective options for a directive are the built-in default, overlaid
//! by the caller's overrides, overlaid by the directive's inline overrides.

use ignoregen_blocks::PartialOptions;

/// Where templates are fetched from when nothing overrides it.
pub const DEFAULT_SRC: &str =
    "https://raw.githubusercontent.com/SnO2WMaN-HQ/ignoregen-template/master/templates/";

/// Fully resolved options for one directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    /// Base URL; should end in `/` so template names resolve beneath it
    pub src: String,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            src: DEFAULT_SRC.to_string(),
        }
    }
}

impl OptionSet {
    /// Overlay every field that is set in `layer`.
    pub fn apply(mut self, layer: &PartialOptions) -> Self {
        if let Some(src) = &layer.src {
            self.src = src.clone();
        }
        self
    }
}

/// Resolve `default <- caller <- directive`.
pub fn resolve(caller: &PartialOptions, directive: &PartialOptions) -> OptionSet {
    OptionSet::default().apply(caller).apply(directive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_uses_default() {
        let options = resolve(&PartialOptions::default(), &PartialOptions::default());
        assert_eq!(options.src, DEFAULT_SRC);
    }

    #[test]
    fn test_caller_overrides_default() {
        let options = resolve(
            &PartialOptions::with_src("https://caller.example/"),
            &PartialOptions::default(),
        );
        assert_eq!(options.src, "https://caller.example/");
    }

    #[test]
    fn test_directive_overrides_caller() {
        let options = resolve(
            &PartialOptions::with_src("https://caller.example/"),
            &PartialOptions::with_src("https://directive.example/"),
        );
        assert_eq!(options.src, "https://directive.example/");
    }

    #[test]
    fn test_directive_overrides_default_without_caller() {
        let options = resolve(
            &PartialOptions::default(),
            &PartialOptions::with_src("https://example.com/ignores/"),
        );
        assert_eq!(options.src, "https://example.com/ignores/");
    }
}
