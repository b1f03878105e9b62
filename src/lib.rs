pub mod cell;
pub mod error;
pub mod logging;
pub mod material;
pub mod player;
pub mod position;
pub mod scenario;
pub mod world;

pub use cell::Cell;
pub use error::{CatalogError, WorldError};
pub use material::{Material, MaterialCatalog, Phase};
pub use player::{Player, PlayerId};
pub use position::{Offset, Position};
pub use world::{World, WorldSummary};
