//! cubetrack End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the two generation flows:
//!
//! - Randomized: configuration -> cube sequence
//! - Signature: signature file on disk -> cube sequence
//! - **Determinism**: identical sequences across runs for a fixed configuration
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cubetrack-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use cubetrack_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| generate_random(&config), 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, CubeDiff, DeterminismResult};
pub use fixtures::SignatureFixture;
