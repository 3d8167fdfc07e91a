//! Main entry point for track generation.
//!
//! Validates the configuration, runs the generator for the requested mode to
//! completion and hashes the result. Either generator produces the same
//! output type; the caller stores it with [`TrackData::set_cubes`].

use std::path::Path;

use cubetrack_spec::validation::validate_for_generate;
use cubetrack_spec::{
    cubes_hash, ErrorCode, GenerationMode, TargetCubeData, TrackConfiguration, TrackData,
};
use log::{info, warn};

use crate::error::GenerateError;
use crate::randomizer::generate_random;
use crate::signature::{map_signature, parse_signature, resolve_signature_path};

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Generated cubes in frame order.
    pub cubes: Vec<TargetCubeData>,
    /// BLAKE3 hash of the cube sequence.
    pub hash: String,
    /// Mode that produced the cubes.
    pub mode: GenerationMode,
}

/// Generate the cube sequence for `config`.
///
/// # Arguments
/// * `config` - Track configuration
/// * `mode` - Which generator to run
/// * `asset_root` - Directory the signature path is relative to (unused in
///   random mode)
///
/// # Example
/// ```
/// use cubetrack_backend_track::generate::generate_cubes;
/// use cubetrack_spec::{GenerationMode, TrackConfiguration};
/// use std::path::Path;
///
/// let config = TrackConfiguration::builder().frame_count(16).seed(1).build();
/// let result = generate_cubes(&config, GenerationMode::Random, Path::new(".")).unwrap();
/// assert_eq!(result.hash.len(), 64);
/// ```
pub fn generate_cubes(
    config: &TrackConfiguration,
    mode: GenerationMode,
    asset_root: &Path,
) -> Result<GenerateResult, GenerateError> {
    let warnings = validate_for_generate(config, mode)
        .into_result()
        .map_err(|errors| {
            if errors.len() == 1 && errors[0].code == ErrorCode::MissingSignaturePath {
                GenerateError::MissingSignaturePath
            } else {
                GenerateError::InvalidConfig(errors)
            }
        })?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    info!(
        "generating track: mode={}, frames={}, seed={}",
        mode, config.frame_count, config.seed
    );

    let cubes = match mode {
        GenerationMode::Random => generate_random(config),
        GenerationMode::Signature => {
            let relative = config
                .signature_file_path
                .as_deref()
                .ok_or(GenerateError::MissingSignaturePath)?;
            let path = resolve_signature_path(asset_root, relative);
            let matrix = parse_signature(&path)?;
            map_signature(&matrix)
        }
    };

    let hash = cubes_hash(&cubes)?;
    info!("generated {} cubes (hash {})", cubes.len(), hash);

    Ok(GenerateResult { cubes, hash, mode })
}

/// Generate cubes from `track.config` and store them in `track`.
///
/// On failure the track is left untouched.
pub fn generate_into(
    track: &mut TrackData,
    mode: GenerationMode,
    asset_root: &Path,
) -> Result<String, GenerateError> {
    let result = generate_cubes(&track.config, mode, asset_root)?;
    track.set_cubes(result.cubes);
    Ok(result.hash)
}
