//! cubetrack Track Backend - Deterministic Cube Placement
//!
//! This crate fills a track's cube collection in one of two ways:
//!
//! - **Randomized**: a seeded PCG32 stream rolls five chances per frame
//!   (not empty, double, top, extreme, same color) and places zero, one or two
//!   cubes, alternating color from frame to frame.
//! - **Signature**: a comma-separated boolean matrix is read from disk and
//!   every `true` cell becomes a cube on its row's frame.
//!
//! # Determinism
//!
//! Both generators are pure functions of their input. Same configuration and
//! seed means an identical cube sequence (and identical BLAKE3 hash). There is
//! no global random state; each run seeds its own stream.
//!
//! # Example
//!
//! ```
//! use cubetrack_backend_track::generate_into;
//! use cubetrack_spec::{GenerationMode, TrackConfiguration, TrackData};
//! use std::path::Path;
//!
//! let config = TrackConfiguration::builder()
//!     .frame_count(32)
//!     .seed(42)
//!     .not_empty_chance(0.75)
//!     .double_chance(0.2)
//!     .build();
//!
//! let mut track = TrackData::new(config);
//! let hash = generate_into(&mut track, GenerationMode::Random, Path::new(".")).unwrap();
//! assert!(track.cubes().len() <= 64);
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Module Structure
//!
//! - [`rng`]: Deterministic PCG32 wrapper
//! - [`randomizer`]: Seeded per-frame cube placement
//! - [`signature`]: Signature file parser and matrix-to-cube mapper
//! - [`generate`]: Validated entry point for both modes
//! - [`error`]: Backend error types

pub mod error;
pub mod generate;
pub mod randomizer;
pub mod rng;
pub mod signature;

// Re-export main types
pub use error::{GenerateError, SignatureError};
pub use generate::{generate_cubes, generate_into, GenerateResult};
pub use randomizer::{
    generate_random, generate_random_traced, FrameRolls, FrameTrace, RandomizedTrack,
};
pub use rng::DeterministicRng;
pub use signature::{
    map_signature, parse_signature, parse_signature_str, resolve_signature_path,
    serialize_signature, SignatureMatrix,
};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier.
pub const BACKEND_ID: &str = "cubetrack-backend-track";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_backend_id() {
        assert_eq!(BACKEND_ID, "cubetrack-backend-track");
    }
}
