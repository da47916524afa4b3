use std::f64::consts::PI;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Converts degrees to the radian equivalent.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to the degree equivalent.
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// A plane angle, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Angle {
    pub radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };
    pub const HALF_TURN: Angle = Angle { radians: PI };

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: to_radians(degrees),
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn degrees(&self) -> f64 {
        to_degrees(self.radians)
    }

    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

/// `sin(60°)`, the height-to-width ratio of an equilateral triangle and of a
/// flat-topped hexagon.
pub fn sin_60() -> f64 {
    Angle::from_degrees(60.0).sin()
}
