//! Signature files: boolean matrices that place cubes deterministically.
//!
//! [`parser`] turns signature text into a [`SignatureMatrix`]; [`mapper`]
//! turns the matrix into cubes, one per `true` cell.

pub mod mapper;
pub mod parser;

pub use mapper::map_signature;
pub use parser::{parse_signature, parse_signature_str, resolve_signature_path, serialize_signature};

/// Rows of boolean cells read from a signature file.
///
/// Row `i` describes frame `i`. Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureMatrix {
    rows: Vec<Vec<bool>>,
}

impl SignatureMatrix {
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of `true` cells across all rows.
    pub fn set_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }
}

impl From<Vec<Vec<bool>>> for SignatureMatrix {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        Self::new(rows)
    }
}
