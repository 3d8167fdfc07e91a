//! End-to-End Signature File Tests for cubetrack
//!
//! Tests verify:
//! - Signature files on disk map to the documented cube placements
//! - Missing files and bad literals surface as errors with no output
//! - Parse/serialize round trip
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cubetrack-tests --test e2e_signature
//! ```

use cubetrack_backend_track::{
    generate_cubes, map_signature, parse_signature, parse_signature_str, resolve_signature_path,
    serialize_signature, GenerateError, SignatureError, SignatureMatrix,
};
use cubetrack_spec::{
    BackendError, CubeColor, GenerationMode, HorizontalPosition, Orientation, TargetCubeData,
    TrackConfiguration, VerticalPosition,
};
use cubetrack_tests::SignatureFixture;
use pretty_assertions::assert_eq;

fn signature_config(path: &str) -> TrackConfiguration {
    TrackConfiguration::builder()
        .frame_count(0)
        .signature_file_path(path)
        .build()
}

fn mapped(id: u32, orientation: Orientation) -> TargetCubeData {
    TargetCubeData {
        id,
        horizontal_position: HorizontalPosition::Right,
        vertical_position: VerticalPosition::Bottom,
        orientation,
        color: CubeColor::Blue,
    }
}

#[test]
fn test_diagonal_signature_file() {
    let fixture = SignatureFixture::new();
    fixture.add_rows("signatures/diag.txt", &[&[true, false], &[false, true]]);

    let result = generate_cubes(
        &signature_config("signatures/diag.txt"),
        GenerationMode::Signature,
        fixture.path(),
    )
    .unwrap();

    assert_eq!(
        result.cubes,
        vec![mapped(0, Orientation::Bottom), mapped(1, Orientation::Top)]
    );
}

#[test]
fn test_signature_ignores_frame_count_and_chances() {
    let fixture = SignatureFixture::new();
    fixture.add_signature("a.txt", "true,true\nfalse\ntrue\n");

    let mut config = signature_config("a.txt");
    config.frame_count = 1;
    config.chances.not_empty = 0.0;

    let cubes = generate_cubes(&config, GenerationMode::Signature, fixture.path())
        .unwrap()
        .cubes;
    assert_eq!(
        cubes,
        vec![
            mapped(0, Orientation::Bottom),
            mapped(0, Orientation::Bottom),
            mapped(2, Orientation::Bottom),
        ]
    );
}

#[test]
fn test_empty_signature_file() {
    let fixture = SignatureFixture::new();
    let path = fixture.add_signature("empty.txt", "");

    let matrix = parse_signature(&path).unwrap();
    assert!(matrix.is_empty());
    assert!(map_signature(&matrix).is_empty());

    let result =
        generate_cubes(&signature_config("empty.txt"), GenerationMode::Signature, fixture.path())
            .unwrap();
    assert!(result.cubes.is_empty());
}

#[test]
fn test_missing_signature_file() {
    let fixture = SignatureFixture::new();
    let err = generate_cubes(
        &signature_config("nope/missing.txt"),
        GenerationMode::Signature,
        fixture.path(),
    )
    .unwrap_err();

    match err {
        GenerateError::Signature(SignatureError::NotFound { ref path }) => {
            assert_eq!(path, &resolve_signature_path(fixture.path(), "nope/missing.txt"));
        }
        ref other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(err.code(), "SIGNATURE_001");
}

#[test]
fn test_yes_token_is_format_error() {
    let fixture = SignatureFixture::new();
    let path = fixture.add_signature("yes.txt", "true,false\nfalse,yes,true\n");

    let err = parse_signature(&path).unwrap_err();
    assert!(matches!(
        err,
        SignatureError::Format { line: 2, column: 2, ref token } if token == "yes"
    ));
    assert_eq!(err.code(), "SIGNATURE_002");
}

#[test]
fn test_windows_line_endings_and_bom() {
    let fixture = SignatureFixture::new();
    let path = fixture.add_signature("crlf.txt", "\u{feff}True,FALSE\r\nfalse , true\r\n");

    let matrix = parse_signature(&path).unwrap();
    assert_eq!(matrix.rows(), &[vec![true, false], vec![false, true]]);
}

#[test]
fn test_round_trip_through_disk() {
    let fixture = SignatureFixture::new();
    let matrix = SignatureMatrix::new(vec![
        vec![false, false, true, false],
        vec![true],
        vec![false, true, true],
    ]);
    let path = fixture.add_signature("round.txt", &serialize_signature(&matrix));

    assert_eq!(parse_signature(&path).unwrap(), matrix);
    assert_eq!(parse_signature_str(&serialize_signature(&matrix)).unwrap(), matrix);
}

#[test]
fn test_unsafe_path_rejected_before_reading() {
    let fixture = SignatureFixture::new();
    let err = generate_cubes(
        &signature_config("../outside.txt"),
        GenerationMode::Signature,
        fixture.path(),
    )
    .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidConfig(_)));
}
