//! Well-known file names used by ignoregen.

use std::path::Path;

/// Files ignoregen looks for in a project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFile {
    /// The default ignore-file to expand
    GitIgnore,
    /// `.ignoregenrc` (JSON without an extension)
    Rc,
    /// `.ignoregenrc.json`
    RcJson,
    /// `.ignoregenrc.toml`
    RcToml,
    /// `.ignoregenrc.yaml`
    RcYaml,
    /// `.ignoregenrc.yml`
    RcYml,
}

impl ProjectFile {
    /// Rc file names in lookup order. The first one that exists wins.
    pub const RC_CANDIDATES: [ProjectFile; 5] = [
        Self::Rc,
        Self::RcJson,
        Self::RcToml,
        Self::RcYaml,
        Self::RcYml,
    ];

    /// Get the string representation of the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitIgnore => ".gitignore",
            Self::Rc => ".ignoregenrc",
            Self::RcJson => ".ignoregenrc.json",
            Self::RcToml => ".ignoregenrc.toml",
            Self::RcYaml => ".ignoregenrc.yaml",
            Self::RcYml => ".ignoregenrc.yml",
        }
    }
}

impl AsRef<Path> for ProjectFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
