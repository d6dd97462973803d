//! [`TestProject`] builder for CLI and pipeline scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory holding an ignore-file and optional rc file.
///
/// # Example
///
/// ```rust,no_run
/// use ignoregen_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_gitignore("# ignoregen node\n");
/// project.write_rc(r#"{"src": "https://example.com/"}"#);
/// assert!(project.gitignore().exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the project's `.gitignore`.
    pub fn gitignore(&self) -> PathBuf {
        self.root().join(".gitignore")
    }

    pub fn write_gitignore(&self, content: &str) -> PathBuf {
        self.write_file(".gitignore", content)
    }

    /// Write `.ignoregenrc` (JSON).
    pub fn write_rc(&self, content: &str) -> PathBuf {
        self.write_file(".ignoregenrc", content)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }

    /// Panics unless `relative` exists with exactly `expected` content.
    pub fn assert_file_content(&self, relative: &str, expected: &str) {
        let actual = self.read_file(relative);
        assert_eq!(
            actual, expected,
            "content of {relative} differs from expectation"
        );
    }
}
