//! Placed-object types: target cubes, walls, and their lane/facing enums.

use serde::{Deserialize, Serialize};

/// Horizontal lane of a placed object.
///
/// `Left`/`Right` are the two inner lanes, `ExtLeft`/`ExtRight` the two
/// outermost ("extreme") lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalPosition {
    /// Inner left lane.
    Left,
    /// Inner right lane.
    Right,
    /// Outermost left lane.
    ExtLeft,
    /// Outermost right lane.
    ExtRight,
}

impl HorizontalPosition {
    /// The two inner lanes, in draw order.
    pub const INNER: [HorizontalPosition; 2] = [HorizontalPosition::Left, HorizontalPosition::Right];

    /// The two extreme lanes, in draw order.
    pub const EXTREME: [HorizontalPosition; 2] =
        [HorizontalPosition::ExtLeft, HorizontalPosition::ExtRight];

    /// Returns the lane pair a cube is drawn from for the given extreme flag.
    pub fn lanes(extreme: bool) -> &'static [HorizontalPosition; 2] {
        if extreme {
            &Self::EXTREME
        } else {
            &Self::INNER
        }
    }

    /// Returns true for the two outermost lanes.
    pub fn is_extreme(&self) -> bool {
        matches!(self, HorizontalPosition::ExtLeft | HorizontalPosition::ExtRight)
    }

    /// Returns the position as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalPosition::Left => "left",
            HorizontalPosition::Right => "right",
            HorizontalPosition::ExtLeft => "ext_left",
            HorizontalPosition::ExtRight => "ext_right",
        }
    }

    /// Returns all horizontal positions.
    pub fn all() -> &'static [HorizontalPosition] {
        &[
            HorizontalPosition::Left,
            HorizontalPosition::Right,
            HorizontalPosition::ExtLeft,
            HorizontalPosition::ExtRight,
        ]
    }
}

impl std::fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HorizontalPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HorizontalPosition::Left),
            "right" => Ok(HorizontalPosition::Right),
            "ext_left" => Ok(HorizontalPosition::ExtLeft),
            "ext_right" => Ok(HorizontalPosition::ExtRight),
            _ => Err(format!("unknown horizontal position: {}", s)),
        }
    }
}

/// Vertical row of a placed cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalPosition {
    /// Upper row.
    Top,
    /// Lower row.
    Bottom,
}

impl VerticalPosition {
    /// Returns the opposite row.
    pub fn inverted(self) -> Self {
        match self {
            VerticalPosition::Top => VerticalPosition::Bottom,
            VerticalPosition::Bottom => VerticalPosition::Top,
        }
    }

    /// Returns the position as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalPosition::Top => "top",
            VerticalPosition::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for VerticalPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VerticalPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalPosition::Top),
            "bottom" => Ok(VerticalPosition::Bottom),
            _ => Err(format!("unknown vertical position: {}", s)),
        }
    }
}

/// Direction a cube has to be struck from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
}

impl Orientation {
    /// All four orientations, in draw order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Top,
        Orientation::Bottom,
        Orientation::Left,
        Orientation::Right,
    ];

    /// Returns all orientations.
    pub fn all() -> &'static [Orientation] {
        &Self::ALL
    }

    /// Returns the orientation as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Orientation::Top),
            "bottom" => Ok(Orientation::Bottom),
            "left" => Ok(Orientation::Left),
            "right" => Ok(Orientation::Right),
            _ => Err(format!("unknown orientation: {}", s)),
        }
    }
}

/// Cube color; each color is struck with its own hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeColor {
    Blue,
    Red,
}

impl CubeColor {
    /// Both colors, in draw order.
    pub const ALL: [CubeColor; 2] = [CubeColor::Blue, CubeColor::Red];

    /// Returns the other color.
    pub fn inverted(self) -> Self {
        match self {
            CubeColor::Blue => CubeColor::Red,
            CubeColor::Red => CubeColor::Blue,
        }
    }

    /// Returns the color as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CubeColor::Blue => "blue",
            CubeColor::Red => "red",
        }
    }
}

impl std::fmt::Display for CubeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CubeColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(CubeColor::Blue),
            "red" => Ok(CubeColor::Red),
            _ => Err(format!("unknown cube color: {}", s)),
        }
    }
}

/// One cube to be struck.
///
/// `id` is the frame the cube belongs to. It is not unique: a doubled frame
/// emits two cubes with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetCubeData {
    /// Frame index.
    pub id: u32,
    pub horizontal_position: HorizontalPosition,
    pub vertical_position: VerticalPosition,
    pub orientation: Orientation,
    pub color: CubeColor,
}

impl TargetCubeData {
    /// Creates a cube record.
    pub fn new(
        id: u32,
        horizontal_position: HorizontalPosition,
        vertical_position: VerticalPosition,
        orientation: Orientation,
        color: CubeColor,
    ) -> Self {
        Self {
            id,
            horizontal_position,
            vertical_position,
            orientation,
            color,
        }
    }

    /// Returns true if `other` is the mirrored partner of this cube in a
    /// doubled frame (same frame, opposite row, opposite color).
    pub fn is_mirror_of(&self, other: &TargetCubeData) -> bool {
        self.id == other.id
            && self.vertical_position == other.vertical_position.inverted()
            && self.color == other.color.inverted()
    }
}

/// A blocking wall. Walls are authored by hand; no generator emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallData {
    pub id: u32,
    /// Lane the wall blocks.
    pub position: HorizontalPosition,
    /// Length in frames.
    pub length: u32,
}
