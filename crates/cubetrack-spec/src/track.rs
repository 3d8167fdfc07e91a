//! The track data container.

use serde::{Deserialize, Serialize};

use crate::config::TrackConfiguration;
use crate::cube::{HorizontalPosition, TargetCubeData, WallData};

/// Configuration plus the two placed-object collections of a track.
///
/// The cube collection is only ever replaced as a whole through
/// [`TrackData::set_cubes`]. Walls are authored by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackData {
    /// Configuration the cubes were generated from.
    pub config: TrackConfiguration,

    #[serde(default)]
    cubes: Vec<TargetCubeData>,

    #[serde(default)]
    walls: Vec<WallData>,
}

impl TrackData {
    /// Creates an empty track for the given configuration.
    pub fn new(config: TrackConfiguration) -> Self {
        Self {
            config,
            cubes: Vec::new(),
            walls: Vec::new(),
        }
    }

    /// Replaces the whole cube collection.
    pub fn set_cubes(&mut self, cubes: Vec<TargetCubeData>) {
        self.cubes = cubes;
    }

    /// Returns the cubes in frame order.
    pub fn cubes(&self) -> &[TargetCubeData] {
        &self.cubes
    }

    /// Returns the authored walls.
    pub fn walls(&self) -> &[WallData] {
        &self.walls
    }

    /// Appends a wall. Its id is the number of walls before it.
    pub fn add_wall(&mut self, position: HorizontalPosition, length: u32) -> &WallData {
        let id = self.walls.len() as u32;
        self.walls.push(WallData {
            id,
            position,
            length,
        });
        &self.walls[self.walls.len() - 1]
    }

    /// Removes every wall.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Parses a track from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the track to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the track to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{CubeColor, Orientation, VerticalPosition};
    use pretty_assertions::assert_eq;

    fn cube(id: u32) -> TargetCubeData {
        TargetCubeData::new(
            id,
            HorizontalPosition::Right,
            VerticalPosition::Bottom,
            Orientation::Bottom,
            CubeColor::Blue,
        )
    }

    #[test]
    fn test_set_cubes_replaces_whole_collection() {
        let mut track = TrackData::default();
        track.set_cubes(vec![cube(0), cube(1), cube(2)]);
        assert_eq!(track.cubes().len(), 3);

        track.set_cubes(vec![cube(9)]);
        assert_eq!(track.cubes(), &[cube(9)]);

        track.set_cubes(Vec::new());
        assert!(track.cubes().is_empty());
    }

    #[test]
    fn test_set_cubes_leaves_walls_alone() {
        let mut track = TrackData::default();
        track.add_wall(HorizontalPosition::Left, 4);
        track.set_cubes(vec![cube(0)]);
        assert_eq!(track.walls().len(), 1);
    }

    #[test]
    fn test_add_wall_assigns_sequential_ids() {
        let mut track = TrackData::default();
        assert_eq!(track.add_wall(HorizontalPosition::Left, 2).id, 0);
        assert_eq!(track.add_wall(HorizontalPosition::ExtRight, 8).id, 1);
        assert_eq!(track.walls()[1].length, 8);

        track.clear_walls();
        assert!(track.walls().is_empty());
        assert_eq!(track.add_wall(HorizontalPosition::Right, 1).id, 0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut track = TrackData::new(TrackConfiguration::builder().seed(5).build());
        track.set_cubes(vec![cube(0), cube(3)]);
        track.add_wall(HorizontalPosition::ExtLeft, 6);

        let json = track.to_json().unwrap();
        assert_eq!(TrackData::from_json(&json).unwrap(), track);
    }
}
