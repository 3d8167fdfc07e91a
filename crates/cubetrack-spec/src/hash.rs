//! BLAKE3 hashing of configurations and generated cube sequences.
//!
//! Hashes are computed over the compact JSON encoding. Field order is fixed by
//! the struct definitions, so equal values always hash equal.

use serde::Serialize;

use crate::config::TrackConfiguration;
use crate::cube::TargetCubeData;
use crate::error::SpecError;

/// Computes the BLAKE3 hash of a cube sequence.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use cubetrack_spec::hash::cubes_hash;
///
/// let hash = cubes_hash(&[]).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn cubes_hash(cubes: &[TargetCubeData]) -> Result<String, SpecError> {
    value_hash(&cubes)
}

/// Computes the BLAKE3 hash of a configuration.
pub fn config_hash(config: &TrackConfiguration) -> Result<String, SpecError> {
    value_hash(config)
}

fn value_hash<T: Serialize>(value: &T) -> Result<String, SpecError> {
    let bytes = serde_json::to_vec(value)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}
