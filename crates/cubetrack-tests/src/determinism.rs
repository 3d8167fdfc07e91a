//! Determinism verification for cube generation.
//!
//! Runs a generator several times and compares the sequences cube by cube,
//! reporting the first divergence.

use std::fmt;

use cubetrack_spec::TargetCubeData;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical sequences.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Number of cubes in the reference run.
    pub cube_count: usize,
    /// BLAKE3 hash of the reference run.
    pub hash: String,
    /// If non-deterministic, the first difference found.
    pub diff: Option<CubeDiff>,
}

/// The first cube that differs between the reference run and another run.
#[derive(Debug, Clone)]
pub struct CubeDiff {
    /// Index into the sequence.
    pub index: usize,
    /// Cube from the reference run, `None` if the reference ended first.
    pub expected: Option<TargetCubeData>,
    /// Cube from the differing run, `None` if that run ended first.
    pub actual: Option<TargetCubeData>,
    /// Which run (0-indexed) diverged.
    pub run_index: usize,
}

impl fmt::Display for CubeDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at cube {}: expected {:?}, got {:?} (run {})",
            self.index, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(ref diff) = self.diff {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Cubes: {}\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.cube_count, self.hash, diff
            );
        }
    }
}

/// BLAKE3 hash of the compact JSON encoding of a cube sequence.
///
/// Computed independently of the backend so tests can cross-check
/// `GenerateResult::hash`.
pub fn compute_hash(cubes: &[TargetCubeData]) -> String {
    let bytes = serde_json::to_vec(cubes).expect("cube sequence serializes");
    blake3::hash(&bytes).to_hex().to_string()
}

/// Run a generator `runs` times and verify every sequence equals the first.
///
/// # Panics
/// Panics if `runs < 2`.
pub fn verify_determinism<F>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> Vec<TargetCubeData>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let hash = compute_hash(&reference);

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = first_difference(&reference, &output, run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                cube_count: reference.len(),
                hash,
                diff: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        cube_count: reference.len(),
        hash,
        diff: None,
    }
}

fn first_difference(
    expected: &[TargetCubeData],
    actual: &[TargetCubeData],
    run_index: usize,
) -> Option<CubeDiff> {
    let len = expected.len().max(actual.len());
    (0..len)
        .find(|&i| expected.get(i) != actual.get(i))
        .map(|index| CubeDiff {
            index,
            expected: expected.get(index).copied(),
            actual: actual.get(index).copied(),
            run_index,
        })
}
