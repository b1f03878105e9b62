//! Grid coordinates and direction vectors

use std::iter::Sum;
use std::ops::{Add, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Immutable 2D coordinate pair.
///
/// Coordinates are wrapped in `OrderedFloat` so equality, hashing and
/// ordering are total: a `Position` is safe to use as a map key.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Position {
    x: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.y.into_inner()
    }

    pub fn offset(self, offset: Offset) -> Position {
        Position::new(self.x() + offset.dx, self.y() + offset.dy)
    }

    /// The four axis neighbours at unit distance: up, down, left, right.
    pub fn neighbours(self) -> [Position; 4] {
        Offset::AXES.map(|offset| self.offset(offset))
    }

    pub fn neighbours_with_offset(self) -> [(Position, Offset); 4] {
        Offset::AXES.map(|offset| (self.offset(offset), offset))
    }

    pub fn distance_squared(self, other: Position) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position::new(x, y)
    }
}

impl From<Position> for (f64, f64) {
    fn from(pos: Position) -> Self {
        (pos.x(), pos.y())
    }
}

/// Direction vector between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const UP: Offset = Offset { dx: 0.0, dy: 1.0 };
    pub const DOWN: Offset = Offset { dx: 0.0, dy: -1.0 };
    pub const LEFT: Offset = Offset { dx: -1.0, dy: 0.0 };
    pub const RIGHT: Offset = Offset { dx: 1.0, dy: 0.0 };

    const AXES: [Offset; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f64) -> Offset {
        Offset::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Sum for Offset {
    fn sum<I: Iterator<Item = Offset>>(iter: I) -> Offset {
        iter.fold(Offset::default(), |acc, offset| acc + offset)
    }
}
