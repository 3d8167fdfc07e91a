//! Track configuration supplied by the host tooling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Default tempo for a new configuration.
pub const DEFAULT_BPM: f32 = 120.0;

/// Default value for every chance.
pub const DEFAULT_CHANCE: f32 = 0.5;

/// When the randomizer's alternating color is allowed to flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCarry {
    /// The color only flips after frames that emitted cubes. Empty frames
    /// leave it untouched.
    #[default]
    NonEmptyFrames,
    /// The color flips after every frame whose same-color roll failed,
    /// including frames that emitted nothing.
    EveryFrame,
}

impl ColorCarry {
    /// Returns the policy as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCarry::NonEmptyFrames => "non_empty_frames",
            ColorCarry::EveryFrame => "every_frame",
        }
    }
}

impl std::fmt::Display for ColorCarry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which generator fills the cube collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Seeded randomizer driven by the five chances.
    Random,
    /// Deterministic placement from a signature file.
    Signature,
}

impl GenerationMode {
    /// Returns the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Random => "random",
            GenerationMode::Signature => "signature",
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(GenerationMode::Random),
            "signature" => Ok(GenerationMode::Signature),
            _ => Err(format!("unknown generation mode: {}", s)),
        }
    }
}

/// The five per-frame probabilities driving the randomizer.
///
/// Each value is meant to lie in `[0, 1]`; use [`Chances::clamped`] before
/// drawing against them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Chances {
    /// Chance that a frame emits anything.
    pub not_empty: f32,
    /// Chance that a non-empty frame emits a mirrored second cube.
    pub double: f32,
    /// Chance that the primary cube sits on the top row.
    pub top: f32,
    /// Chance that cubes use the extreme lanes.
    pub extreme: f32,
    /// Chance that the next frame keeps the current color.
    pub same_color: f32,
}

impl Chances {
    /// Creates a set of chances with every value equal to `chance`.
    pub fn uniform(chance: f32) -> Self {
        Self {
            not_empty: chance,
            double: chance,
            top: chance,
            extreme: chance,
            same_color: chance,
        }
    }

    /// Returns a copy with every value clamped to `[0, 1]`. NaN becomes 0.
    pub fn clamped(&self) -> Self {
        Self {
            not_empty: clamp_unit(self.not_empty),
            double: clamp_unit(self.double),
            top: clamp_unit(self.top),
            extreme: clamp_unit(self.extreme),
            same_color: clamp_unit(self.same_color),
        }
    }

    /// Returns `(field name, value)` pairs in roll order.
    pub fn named(&self) -> [(&'static str, f32); 5] {
        [
            ("not_empty", self.not_empty),
            ("double", self.double),
            ("top", self.top),
            ("extreme", self.extreme),
            ("same_color", self.same_color),
        ]
    }
}

impl Default for Chances {
    fn default() -> Self {
        Self::uniform(DEFAULT_CHANCE)
    }
}

/// Clamps a probability to `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Configuration of one track.
///
/// Authored externally and consumed read-only by the generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackConfiguration {
    /// Tempo in beats per minute. Stored for display; never computed.
    pub bpm: f32,

    /// Number of frames the randomizer rolls.
    pub frame_count: u32,

    /// Seed for the randomizer.
    pub seed: i32,

    /// Offset of the first frame. Carried through, unused by generation.
    pub starting_offset: i32,

    /// Per-frame probabilities.
    pub chances: Chances,

    /// Signature file path, relative to the host's asset root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_file_path: Option<String>,

    /// Audio asset the track is authored against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_clip: Option<String>,

    /// Color flip policy for empty frames.
    pub color_carry: ColorCarry,
}

impl Default for TrackConfiguration {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            frame_count: 0,
            seed: 0,
            starting_offset: 0,
            chances: Chances::default(),
            signature_file_path: None,
            audio_clip: None,
            color_carry: ColorCarry::default(),
        }
    }
}

impl TrackConfiguration {
    /// Creates a new configuration builder.
    pub fn builder() -> TrackConfigurationBuilder {
        TrackConfigurationBuilder::new()
    }

    /// Returns a copy with the chances clamped to `[0, 1]`.
    pub fn clamped(&self) -> Self {
        Self {
            chances: self.chances.clamped(),
            ..self.clone()
        }
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builder for constructing [`TrackConfiguration`] instances.
#[derive(Debug, Clone, Default)]
pub struct TrackConfigurationBuilder {
    config: TrackConfiguration,
}

impl TrackConfigurationBuilder {
    /// Creates a builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tempo.
    pub fn bpm(mut self, bpm: f32) -> Self {
        self.config.bpm = bpm;
        self
    }

    /// Sets the number of frames.
    pub fn frame_count(mut self, frame_count: u32) -> Self {
        self.config.frame_count = frame_count;
        self
    }

    /// Sets the seed.
    pub fn seed(mut self, seed: i32) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets the starting offset.
    pub fn starting_offset(mut self, offset: i32) -> Self {
        self.config.starting_offset = offset;
        self
    }

    /// Sets all five chances at once.
    pub fn chances(mut self, chances: Chances) -> Self {
        self.config.chances = chances;
        self
    }

    pub fn not_empty_chance(mut self, chance: f32) -> Self {
        self.config.chances.not_empty = chance;
        self
    }

    pub fn double_chance(mut self, chance: f32) -> Self {
        self.config.chances.double = chance;
        self
    }

    pub fn top_chance(mut self, chance: f32) -> Self {
        self.config.chances.top = chance;
        self
    }

    pub fn extreme_chance(mut self, chance: f32) -> Self {
        self.config.chances.extreme = chance;
        self
    }

    pub fn same_color_chance(mut self, chance: f32) -> Self {
        self.config.chances.same_color = chance;
        self
    }

    /// Sets the signature file path.
    pub fn signature_file_path(mut self, path: impl Into<String>) -> Self {
        self.config.signature_file_path = Some(path.into());
        self
    }

    /// Sets the audio clip reference.
    pub fn audio_clip(mut self, clip: impl Into<String>) -> Self {
        self.config.audio_clip = Some(clip.into());
        self
    }

    /// Sets the color flip policy.
    pub fn color_carry(mut self, carry: ColorCarry) -> Self {
        self.config.color_carry = carry;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> TrackConfiguration {
        self.config
    }
}
