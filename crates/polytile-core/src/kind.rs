use serde::{Deserialize, Serialize};

use crate::angle::Angle;

/// Fewest sides a regular polygon can have.
pub const MIN_SIDES: usize = 3;
/// Most sides a regular polygon is drawn with before it reads as a circle.
pub const MAX_SIDES: usize = 120;

/// Clamp an arbitrary side count into `[MIN_SIDES, MAX_SIDES]`.
pub fn clamp_sides(sides: usize) -> usize {
    sides.clamp(MIN_SIDES, MAX_SIDES)
}

/// The polygons that can tile the plane edge-to-edge.
///
/// Each variant carries the rotation applied before any tiling offset so that
/// its flat edges line up with the neighbouring tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PolygonKind {
    /// 30° makes the triangle point upwards.
    EquilateralTriangle { initial_rotation: Angle },
    /// 45° turns the diamond into a square.
    Square { initial_rotation: Angle },
    /// Flat-topped by default.
    Hexagon { initial_rotation: Angle },
    /// 22.5° (π/8) leaves the left and right sides flat.
    Octagon { initial_rotation: Angle },
    /// `width_to_height_ratio` is W/H.
    Rectangle {
        initial_rotation: Angle,
        width_to_height_ratio: f64,
    },
}

impl PolygonKind {
    pub fn triangle() -> Self {
        Self::EquilateralTriangle {
            initial_rotation: Angle::from_degrees(30.0),
        }
    }

    pub fn square() -> Self {
        Self::Square {
            initial_rotation: Angle::from_degrees(45.0),
        }
    }

    pub fn hexagon() -> Self {
        Self::Hexagon {
            initial_rotation: Angle::ZERO,
        }
    }

    pub fn octagon() -> Self {
        Self::Octagon {
            initial_rotation: Angle::from_degrees(22.5),
        }
    }

    pub fn rectangle(width_to_height_ratio: f64) -> Self {
        Self::Rectangle {
            initial_rotation: Angle::from_degrees(45.0),
            width_to_height_ratio,
        }
    }

    /// Four sides, no rotation. Stands in for a kind that could not be read.
    pub fn fallback() -> Self {
        Self::Square {
            initial_rotation: Angle::ZERO,
        }
    }

    /// Same kind with a different initial rotation.
    pub fn with_initial_rotation(self, rotation: Angle) -> Self {
        match self {
            Self::EquilateralTriangle { .. } => Self::EquilateralTriangle {
                initial_rotation: rotation,
            },
            Self::Square { .. } => Self::Square {
                initial_rotation: rotation,
            },
            Self::Hexagon { .. } => Self::Hexagon {
                initial_rotation: rotation,
            },
            Self::Octagon { .. } => Self::Octagon {
                initial_rotation: rotation,
            },
            Self::Rectangle {
                width_to_height_ratio,
                ..
            } => Self::Rectangle {
                initial_rotation: rotation,
                width_to_height_ratio,
            },
        }
    }

    pub fn sides(&self) -> usize {
        match self {
            Self::EquilateralTriangle { .. } => 3,
            Self::Square { .. } => 4,
            Self::Hexagon { .. } => 6,
            Self::Octagon { .. } => 8,
            Self::Rectangle { .. } => 4,
        }
    }

    pub fn initial_rotation(&self) -> Angle {
        match self {
            Self::EquilateralTriangle { initial_rotation }
            | Self::Square { initial_rotation }
            | Self::Hexagon { initial_rotation }
            | Self::Octagon { initial_rotation }
            | Self::Rectangle {
                initial_rotation, ..
            } => *initial_rotation,
        }
    }

    pub fn width_to_height_ratio(&self) -> Option<f64> {
        match self {
            Self::Rectangle {
                width_to_height_ratio,
                ..
            } => Some(*width_to_height_ratio),
            Self::EquilateralTriangle { .. }
            | Self::Square { .. }
            | Self::Hexagon { .. }
            | Self::Octagon { .. } => None,
        }
    }

    /// Whether the vertices sit on a circle around the tile center.
    pub fn has_equilateral_sides(&self) -> bool {
        !matches!(self, Self::Rectangle { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EquilateralTriangle { .. } => "EquilateralTriangle",
            Self::Square { .. } => "Square",
            Self::Hexagon { .. } => "Hexagon",
            Self::Octagon { .. } => "Octagon",
            Self::Rectangle { .. } => "Rectangle",
        }
    }

    /// Stable identifier, e.g. `Square-numberOfSides:4-rotation:45`.
    pub fn id(&self) -> String {
        // Round away the radian round-trip noise so 45° prints as `45`.
        let degrees = (self.initial_rotation().degrees() * 1e6).round() / 1e6;
        format!(
            "{}-numberOfSides:{}-rotation:{}",
            self.name(),
            self.sides(),
            degrees
        )
    }
}

impl Default for PolygonKind {
    fn default() -> Self {
        Self::square()
    }
}
