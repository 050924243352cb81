//! [`TestVault`] builder for document-directory test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory of documents with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use fm_test_utils::vault::TestVault;
///
/// let vault = TestVault::new();
/// vault.write_doc("post.md", "---\nb: 1\na: 2\n---\nBody\n");
/// let config = vault.write_config("rules.json", &["a"], &[]);
/// vault.assert_doc("post.md", "---\nb: 1\na: 2\n---\nBody\n");
/// ```
pub struct TestVault {
    temp_dir: TempDir,
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVault {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a document at `name` (relative to the root), creating parents.
    pub fn write_doc(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a document back as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_doc(&self, name: &str) -> String {
        let path = self.root().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Write a JSON ruleset with `top_keys` and `bottom_keys`.
    pub fn write_config(&self, name: &str, top: &[&str], bottom: &[&str]) -> PathBuf {
        let config = serde_json::json!({
            "top_keys": top,
            "bottom_keys": bottom,
        });
        self.write_doc(name, &serde_json::to_string_pretty(&config).unwrap())
    }

    /// Assert that the document at `name` has exactly `expected` as content.
    ///
    /// # Panics
    /// Panics with both contents shown if they differ.
    pub fn assert_doc(&self, name: &str, expected: &str) {
        let actual = self.read_doc(name);
        assert!(
            actual == expected,
            "Document {name} differs.\nExpected:\n{expected}\nActual:\n{actual}"
        );
    }
}
