use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("material catalog io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("material catalog csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("material '{name}' has unknown phase '{phase}'")]
    UnknownPhase { name: String, phase: String },

    #[error("material '{name}' is missing field '{field}'")]
    MissingField { name: String, field: &'static str },

    #[error("material '{0}' defined more than once")]
    DuplicateMaterial(String),

    #[error("material '{name}' turns into unknown material '{product}'")]
    UnknownProduct { name: String, product: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("cell stored at {key:?} reports position {found:?}")]
    MisplacedCell { key: Position, found: Position },

    #[error("cell at {pos:?} has unknown type '{ty}'")]
    UnknownCellType { pos: Position, ty: String },
}
