//! Configuration resolution with layered merge

use crate::Result;
use ignoregen_blocks::PartialOptions;
use ignoregen_fs::{ConfigStore, ProjectFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Schema of an rc file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RcConfig {
    /// Base URL for templates
    #[serde(default)]
    pub src: Option<String>,
}

impl From<RcConfig> for PartialOptions {
    fn from(config: RcConfig) -> Self {
        Self { src: config.src }
    }
}

/// Resolves the caller override for a project directory.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Directory searched for rc files
    root: PathBuf,

    /// Config file named by the caller; disables rc discovery
    config_file: Option<PathBuf>,

    /// Highest-precedence overrides, e.g. from CLI flags
    overrides: PartialOptions,
}

impl ConfigResolver {
    /// Create a resolver that discovers rc files in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_file: None,
            overrides: PartialOptions::default(),
        }
    }

    /// Use this config file instead of discovering one.
    ///
    /// Unlike a discovered rc file, a named file must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Layer explicit overrides on top of the rc file.
    pub fn with_overrides(mut self, overrides: PartialOptions) -> Self {
        self.overrides = overrides;
        self
    }

    /// The first rc file present in the project directory.
    pub fn find_rc_file(&self) -> Option<PathBuf> {
        ProjectFile::RC_CANDIDATES
            .iter()
            .map(|candidate| self.root.join(candidate))
            .find(|path| path.is_file())
    }

    /// Resolve the caller override.
    ///
    /// A missing rc file is skipped. A config file that fails to parse, or a
    /// named config file that is missing, is an error.
    pub fn resolve(&self) -> Result<PartialOptions> {
        let mut options = PartialOptions::default();

        let config_path = match &self.config_file {
            Some(path) => Some(path.clone()),
            None => self.find_rc_file(),
        };

        match config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading rc config");
                options.merge(&load_rc(&path)?.into());
            }
            None => {
                tracing::debug!(root = %self.root.display(), "No rc config found, skipping");
            }
        }

        options.merge(&self.overrides);
        Ok(options)
    }
}

fn load_rc(path: &Path) -> Result<RcConfig> {
    Ok(ConfigStore::new().load(path)?)
}
