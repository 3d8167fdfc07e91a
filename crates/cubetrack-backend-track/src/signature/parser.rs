//! Signature file reading and writing.
//!
//! Format: one row per line, cells separated by commas, each cell a
//! case-insensitive `true` or `false` with optional surrounding whitespace.
//! Rows may differ in length. A trailing newline does not add a row.

use std::path::{Path, PathBuf};

use log::debug;

use super::SignatureMatrix;
use crate::error::SignatureError;

const BOM: char = '\u{feff}';

/// Joins a signature path onto the host's asset root.
pub fn resolve_signature_path(asset_root: &Path, relative: &str) -> PathBuf {
    asset_root.join(relative)
}

/// Reads and parses a signature file.
///
/// The file is read in one go and closed before parsing. Fails with
/// [`SignatureError::NotFound`] when the path does not exist and
/// [`SignatureError::Format`] on the first cell that is not a boolean
/// literal. Nothing is returned on failure.
pub fn parse_signature(path: &Path) -> Result<SignatureMatrix, SignatureError> {
    if !path.exists() {
        return Err(SignatureError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => SignatureError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SignatureError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let matrix = parse_signature_str(&text)?;
    debug!(
        "parsed signature {} ({} rows, {} set cells)",
        path.display(),
        matrix.row_count(),
        matrix.set_count()
    );
    Ok(matrix)
}

/// Parses signature text.
pub fn parse_signature_str(text: &str) -> Result<SignatureMatrix, SignatureError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let rows = text
        .lines()
        .enumerate()
        .map(|(line_idx, line)| parse_row(line, line_idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SignatureMatrix::new(rows))
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>, SignatureError> {
    line.split(',')
        .enumerate()
        .map(|(cell_idx, token)| {
            parse_cell(token).ok_or_else(|| SignatureError::Format {
                line: line_number,
                column: cell_idx + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_cell(token: &str) -> Option<bool> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Writes a matrix in signature file format, one `\n`-terminated line per
/// row.
///
/// An empty row has no literal to write and reads back as a format error, so
/// only matrices without empty rows survive a round trip.
pub fn serialize_signature(matrix: &SignatureMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let cells: Vec<&str> = row
            .iter()
            .map(|&cell| if cell { "true" } else { "false" })
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}
