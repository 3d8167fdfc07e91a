//! Seeded randomized cube placement.
//!
//! One pass over `frame_count` frames. Each frame rolls five chances in a
//! fixed order (not empty, double, top, extreme, same color) from a single
//! PCG32 stream seeded with the track seed, then places zero, one or two
//! cubes. The current color is carried from frame to frame.
//!
//! A doubled frame restarts the stream from the frame index before placing
//! its mirrored cube. Every later frame continues from that restarted stream.

use cubetrack_spec::{
    Chances, ColorCarry, CubeColor, HorizontalPosition, Orientation, TargetCubeData,
    TrackConfiguration, VerticalPosition,
};
use log::debug;

use crate::rng::DeterministicRng;

/// Outcome of the five per-frame rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRolls {
    pub not_empty: bool,
    pub double: bool,
    pub top: bool,
    pub extreme: bool,
    pub same_color: bool,
}

impl FrameRolls {
    /// Rolls all five chances in order. `chances` must already be clamped.
    pub fn roll(rng: &mut DeterministicRng, chances: &Chances) -> Self {
        Self {
            not_empty: rng.chance(chances.not_empty),
            double: rng.chance(chances.double),
            top: rng.chance(chances.top),
            extreme: rng.chance(chances.extreme),
            same_color: rng.chance(chances.same_color),
        }
    }
}

/// What happened on one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTrace {
    pub frame: u32,
    pub rolls: FrameRolls,
    /// Color the frame's primary cube uses (or would have used).
    pub color_before: CubeColor,
    /// Color carried into the next frame.
    pub color_after: CubeColor,
    /// Number of cubes emitted: 0, 1 or 2.
    pub emitted: u8,
}

/// Randomizer output together with the per-frame decision trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomizedTrack {
    pub cubes: Vec<TargetCubeData>,
    pub frames: Vec<FrameTrace>,
}

/// Generates the cube sequence for `config`.
///
/// Pure function of the configuration: the same configuration always yields
/// the same sequence. Chances are clamped to `[0, 1]` first.
///
/// # Example
/// ```
/// use cubetrack_spec::TrackConfiguration;
/// use cubetrack_backend_track::randomizer::generate_random;
///
/// let config = TrackConfiguration::builder().frame_count(32).seed(7).build();
/// let cubes = generate_random(&config);
/// assert!(cubes.len() <= 64);
/// assert_eq!(cubes, generate_random(&config));
/// ```
pub fn generate_random(config: &TrackConfiguration) -> Vec<TargetCubeData> {
    generate_random_traced(config).cubes
}

/// Like [`generate_random`], also returning one [`FrameTrace`] per frame.
pub fn generate_random_traced(config: &TrackConfiguration) -> RandomizedTrack {
    let chances = config.chances.clamped();
    let mut rng = DeterministicRng::from_track_seed(config.seed);
    let mut color = rng.pick(&CubeColor::ALL);

    let mut cubes = Vec::new();
    let mut frames = Vec::new();

    for frame in 0..config.frame_count {
        let rolls = FrameRolls::roll(&mut rng, &chances);
        let color_before = color;
        let mut emitted = 0u8;

        if rolls.not_empty {
            let vertical = if rolls.top {
                VerticalPosition::Top
            } else {
                VerticalPosition::Bottom
            };
            cubes.push(place_cube(&mut rng, frame, rolls.extreme, vertical, color));
            emitted += 1;

            if rolls.double {
                debug!("frame {}: doubled, restarting stream from frame index", frame);
                rng.reseed(frame);
                cubes.push(place_cube(
                    &mut rng,
                    frame,
                    rolls.extreme,
                    vertical.inverted(),
                    color.inverted(),
                ));
                emitted += 1;
            }
        }

        let may_flip = match config.color_carry {
            ColorCarry::NonEmptyFrames => rolls.not_empty,
            ColorCarry::EveryFrame => true,
        };
        if may_flip && !rolls.same_color {
            color = color.inverted();
        }

        frames.push(FrameTrace {
            frame,
            rolls,
            color_before,
            color_after: color,
            emitted,
        });
    }

    RandomizedTrack { cubes, frames }
}

/// Draws lane then orientation for one cube.
fn place_cube(
    rng: &mut DeterministicRng,
    frame: u32,
    extreme: bool,
    vertical_position: VerticalPosition,
    color: CubeColor,
) -> TargetCubeData {
    let horizontal_position = rng.pick(HorizontalPosition::lanes(extreme));
    let orientation = rng.pick(&Orientation::ALL);
    TargetCubeData {
        id: frame,
        horizontal_position,
        vertical_position,
        orientation,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(seed: i32, frames: u32, chances: Chances) -> TrackConfiguration {
        TrackConfiguration::builder()
            .seed(seed)
            .frame_count(frames)
            .chances(chances)
            .build()
    }

    #[test]
    fn test_zero_frames_is_empty() {
        let track = generate_random_traced(&config(1, 0, Chances::uniform(1.0)));
        assert!(track.cubes.is_empty());
        assert!(track.frames.is_empty());
    }

    #[test]
    fn test_determinism() {
        let c = config(1234, 200, Chances::default());
        assert_eq!(generate_random(&c), generate_random(&c));
    }

    #[test]
    fn test_never_empty_never_double() {
        let chances = Chances {
            not_empty: 1.0,
            double: 0.0,
            ..Chances::default()
        };
        let cubes = generate_random(&config(5, 50, chances));
        assert_eq!(cubes.len(), 50);
        for (i, cube) in cubes.iter().enumerate() {
            assert_eq!(cube.id, i as u32);
        }
    }

    #[test]
    fn test_always_double_mirrors() {
        let chances = Chances {
            not_empty: 1.0,
            double: 1.0,
            ..Chances::default()
        };
        let cubes = generate_random(&config(9, 40, chances));
        assert_eq!(cubes.len(), 80);
        for pair in cubes.chunks(2) {
            assert!(pair[0].is_mirror_of(&pair[1]));
        }
    }

    #[test]
    fn test_extreme_and_top_flags() {
        let chances = Chances {
            not_empty: 1.0,
            double: 0.0,
            top: 1.0,
            extreme: 1.0,
            same_color: 0.5,
        };
        for cube in generate_random(&config(3, 100, chances)) {
            assert!(cube.horizontal_position.is_extreme());
            assert_eq!(cube.vertical_position, VerticalPosition::Top);
        }

        let chances = Chances {
            top: 0.0,
            extreme: 0.0,
            ..chances
        };
        for cube in generate_random(&config(3, 100, chances)) {
            assert!(!cube.horizontal_position.is_extreme());
            assert_eq!(cube.vertical_position, VerticalPosition::Bottom);
        }
    }

    #[test]
    fn test_doubled_cube_uses_same_lane_pair() {
        let chances = Chances {
            not_empty: 1.0,
            double: 1.0,
            extreme: 0.5,
            ..Chances::default()
        };
        let cubes = generate_random(&config(77, 200, chances));
        for pair in cubes.chunks(2) {
            assert_eq!(
                pair[0].horizontal_position.is_extreme(),
                pair[1].horizontal_position.is_extreme()
            );
        }
    }

    #[test]
    fn test_doubled_cube_depends_only_on_frame_index() {
        // The mirrored cube is placed from a stream restarted at the frame
        // index, so its lane and orientation match a fresh stream's first
        // two picks.
        let chances = Chances {
            not_empty: 1.0,
            double: 1.0,
            ..Chances::default()
        };
        for seed in [1, 2, 3] {
            let cubes = generate_random(&config(seed, 10, chances));
            for pair in cubes.chunks(2) {
                let mut fresh = DeterministicRng::new(pair[1].id);
                let extreme = pair[1].horizontal_position.is_extreme();
                assert_eq!(
                    fresh.pick(HorizontalPosition::lanes(extreme)),
                    pair[1].horizontal_position
                );
                assert_eq!(fresh.pick(&Orientation::ALL), pair[1].orientation);
            }
        }
    }

    #[test]
    fn test_same_color_always_keeps_color() {
        let chances = Chances {
            not_empty: 1.0,
            double: 0.0,
            same_color: 1.0,
            ..Chances::default()
        };
        let cubes = generate_random(&config(11, 30, chances));
        assert!(cubes.iter().all(|c| c.color == cubes[0].color));
    }

    #[test]
    fn test_same_color_never_alternates() {
        let chances = Chances {
            not_empty: 1.0,
            double: 0.0,
            same_color: 0.0,
            ..Chances::default()
        };
        let cubes = generate_random(&config(11, 30, chances));
        for pair in cubes.windows(2) {
            assert_eq!(pair[1].color, pair[0].color.inverted());
        }
    }

    #[test]
    fn test_color_held_on_empty_frames_by_default() {
        let c = config(
            21,
            40,
            Chances {
                not_empty: 0.5,
                double: 0.0,
                same_color: 0.0,
                ..Chances::default()
            },
        );
        assert_eq!(c.color_carry, ColorCarry::NonEmptyFrames);
        let track = generate_random_traced(&c);
        assert!(track.frames.iter().any(|f| !f.rolls.not_empty));
        for pair in track.cubes.windows(2) {
            assert_eq!(pair[1].color, pair[0].color.inverted());
        }
        for trace in &track.frames {
            if trace.rolls.not_empty {
                assert_eq!(trace.color_after, trace.color_before.inverted());
            } else {
                assert_eq!(trace.color_after, trace.color_before);
                assert_eq!(trace.emitted, 0);
            }
        }
    }

    #[test]
    fn test_color_flips_on_empty_frames_when_configured() {
        let mut c = config(
            21,
            100,
            Chances {
                not_empty: 0.5,
                double: 0.0,
                same_color: 0.0,
                ..Chances::default()
            },
        );
        c.color_carry = ColorCarry::EveryFrame;
        let track = generate_random_traced(&c);
        let first = track.frames[0].color_before;
        for cube in &track.cubes {
            let expected = if cube.id % 2 == 0 { first } else { first.inverted() };
            assert_eq!(cube.color, expected);
        }
        for trace in &track.frames {
            assert_eq!(trace.color_after, trace.color_before.inverted());
        }
    }

    #[test]
    fn test_trace_matches_output() {
        let track = generate_random_traced(&config(8, 64, Chances::default()));
        assert_eq!(track.frames.len(), 64);
        let emitted: usize = track.frames.iter().map(|f| f.emitted as usize).sum();
        assert_eq!(emitted, track.cubes.len());
        for pair in track.frames.windows(2) {
            assert_eq!(pair[1].color_before, pair[0].color_after);
        }
    }

    #[test]
    fn test_out_of_range_chances_are_clamped() {
        let raw = Chances {
            not_empty: 3.0,
            double: -2.0,
            top: f32::NAN,
            extreme: 0.5,
            same_color: 0.5,
        };
        let clamped = raw.clamped();
        assert_eq!(
            generate_random(&config(4, 50, raw)),
            generate_random(&config(4, 50, clamped))
        );
        let cubes = generate_random(&config(4, 50, raw));
        assert_eq!(cubes.len(), 50);
        assert!(cubes
            .iter()
            .all(|c| c.vertical_position == VerticalPosition::Bottom));
    }
}
