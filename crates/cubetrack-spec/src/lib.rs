//! cubetrack Track Data Library
//!
//! This crate provides the data model, configuration, validation, and hashing
//! for cubetrack tracks. A track is a frame-indexed sequence of target cubes
//! (plus hand-authored walls) for a rhythm game.
//!
//! # Example
//!
//! ```
//! use cubetrack_spec::{TrackConfiguration, TrackData, GenerationMode};
//! use cubetrack_spec::validation::validate_for_generate;
//!
//! let config = TrackConfiguration::builder()
//!     .bpm(128.0)
//!     .frame_count(64)
//!     .seed(42)
//!     .not_empty_chance(0.8)
//!     .double_chance(0.1)
//!     .build();
//!
//! let result = validate_for_generate(&config, GenerationMode::Random);
//! assert!(result.is_ok());
//!
//! let track = TrackData::new(config);
//! assert!(track.cubes().is_empty());
//! ```
//!
//! # Modules
//!
//! - [`cube`]: Cube and wall records and their position/orientation/color enums
//! - [`config`]: Track configuration and builder
//! - [`track`]: Track data container
//! - [`validation`]: Configuration validation
//! - [`hash`]: BLAKE3 hashing of configurations and cube sequences
//! - [`error`]: Error and warning types

pub mod config;
pub mod cube;
pub mod error;
pub mod hash;
pub mod track;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::{
    clamp_unit, Chances, ColorCarry, GenerationMode, TrackConfiguration,
    TrackConfigurationBuilder, DEFAULT_BPM, DEFAULT_CHANCE,
};
pub use cube::{
    CubeColor, HorizontalPosition, Orientation, TargetCubeData, VerticalPosition, WallData,
};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{config_hash, cubes_hash};
pub use track::TrackData;
pub use validation::{is_safe_signature_path, validate_config, validate_for_generate};
