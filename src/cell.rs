use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Contents of one grid location. `ty` is an open tag; see
/// [`MaterialCatalog`](crate::material::MaterialCatalog) for the known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Position,
    pub ty: String,
    pub amount: f64,
}

impl Cell {
    pub fn new(pos: Position, ty: impl Into<String>, amount: f64) -> Self {
        Self {
            pos,
            ty: ty.into(),
            amount,
        }
    }
}
