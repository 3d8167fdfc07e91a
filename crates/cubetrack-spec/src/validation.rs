//! Track configuration validation.

use crate::config::{GenerationMode, TrackConfiguration};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

/// Validates a configuration independently of the generation mode.
///
/// Every finding here is a warning: the generators clamp the chances and the
/// tempo is never read.
///
/// # Example
/// ```
/// use cubetrack_spec::TrackConfiguration;
/// use cubetrack_spec::validation::validate_config;
///
/// let config = TrackConfiguration::builder().frame_count(16).seed(3).build();
/// assert!(validate_config(&config).is_ok());
/// ```
pub fn validate_config(config: &TrackConfiguration) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_bpm(config, &mut result);
    validate_chances(config, &mut result);

    if config.frame_count == 0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NoFrames,
            "frame_count is 0, randomized generation will produce no cubes",
            "frame_count",
        ));
    }

    result
}

/// Validates a configuration for a specific generation mode.
///
/// Random mode never fails. Signature mode requires a signature path that
/// stays inside the asset root.
pub fn validate_for_generate(config: &TrackConfiguration, mode: GenerationMode) -> ValidationResult {
    let mut result = validate_config(config);

    if mode == GenerationMode::Signature {
        match config.signature_file_path {
            Some(ref path) => validate_signature_path(path, &mut result),
            None => result.add_error(ValidationError::with_path(
                ErrorCode::MissingSignaturePath,
                "signature generation requires a signature file path",
                "signature_file_path",
            )),
        }
    }

    result
}

fn validate_bpm(config: &TrackConfiguration, result: &mut ValidationResult) {
    if !config.bpm.is_finite() || config.bpm <= 0.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::InvalidBpm,
            format!("bpm should be a positive number, got {}", config.bpm),
            "bpm",
        ));
    }
}

fn validate_chances(config: &TrackConfiguration, result: &mut ValidationResult) {
    for (name, value) in config.chances.named() {
        let path = format!("chances.{}", name);
        if !value.is_finite() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::NonFiniteChance,
                format!("chance {} is not finite and will be clamped", value),
                path,
            ));
        } else if !(0.0..=1.0).contains(&value) {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::ChanceOutOfRange,
                format!("chance {} is outside [0, 1] and will be clamped", value),
                path,
            ));
        }
    }
}

fn validate_signature_path(path: &str, result: &mut ValidationResult) {
    if !is_safe_signature_path(path) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeSignaturePath,
            format!(
                "signature path must be a non-empty path inside the asset root, got '{}'",
                path
            ),
            "signature_file_path",
        ));
    }
}

/// Returns true if `path` is a non-empty relative path that stays inside the
/// asset root.
///
/// Both `/` and `\` are treated as separators.
pub fn is_safe_signature_path(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    if path.starts_with('/') || path.starts_with('\\') {
        return false;
    }
    // Windows drive prefix, e.g. "C:".
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return false;
    }
    !path.split(['/', '\\']).any(|component| component == "..")
}
