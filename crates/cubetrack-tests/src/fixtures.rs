//! Test fixture utilities for signature files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary asset root holding signature files.
pub struct SignatureFixture {
    pub root: TempDir,
}

impl SignatureFixture {
    /// Create a new empty asset root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the asset root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a signature file at `relative` (creating parent directories) and
    /// return its full path.
    pub fn add_signature(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create signature dir");
        }
        fs::write(&path, content).expect("Failed to write signature file");
        path
    }

    /// Write a signature file from boolean rows.
    pub fn add_rows(&self, relative: &str, rows: &[&[bool]]) -> PathBuf {
        let content: String = rows
            .iter()
            .map(|row| {
                let cells: Vec<&str> = row
                    .iter()
                    .map(|&cell| if cell { "true" } else { "false" })
                    .collect();
                format!("{}\n", cells.join(","))
            })
            .collect();
        self.add_signature(relative, &content)
    }
}

impl Default for SignatureFixture {
    fn default() -> Self {
        Self::new()
    }
}
