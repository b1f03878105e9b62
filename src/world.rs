use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::Cell;
use crate::error::WorldError;
use crate::material::MaterialCatalog;
use crate::player::{Player, PlayerId};
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSummary {
    pub cell_count: usize,
    pub player_count: usize,
    pub amount_by_type: BTreeMap<String, f64>,
    pub misplaced_cells: Vec<Position>,
}

/// Aggregate root. Owns every cell (keyed by position) and every player
/// (keyed by id).
///
/// Both maps are public. Nothing forces a cell's key to match its `pos`;
/// [`World::insert_cell`] keys by `pos` and [`World::validate`] reports
/// any divergence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    pub cells: HashMap<Position, Cell>,
    pub players: HashMap<PlayerId, Player>,
}

impl World {
    pub fn new(cells: HashMap<Position, Cell>, players: HashMap<PlayerId, Player>) -> Self {
        Self { cells, players }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Stores `cell` under its own position, returning whatever was there.
    pub fn insert_cell(&mut self, cell: Cell) -> Option<Cell> {
        let replaced = self.cells.insert(cell.pos, cell);
        if let Some(old) = &replaced {
            debug!(pos = ?old.pos, ty = %old.ty, "replaced cell");
        }
        replaced
    }

    /// Stores `player` under its id. Last write wins.
    pub fn insert_player(&mut self, player: Player) -> Option<Player> {
        let replaced = self.players.insert(player.id, player);
        if let Some(old) = &replaced {
            debug!(id = old.id, name = %old.name, "replaced player");
        }
        replaced
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.cells.get_mut(&pos)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    pub fn remove_cell(&mut self, pos: Position) -> Option<Cell> {
        self.cells.remove(&pos)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        self.players.remove(&id)
    }

    /// Cells present at the four axis neighbours of `pos`.
    pub fn neighbours(&self, pos: Position) -> Vec<&Cell> {
        pos.neighbours()
            .iter()
            .filter_map(|n| self.cells.get(n))
            .collect()
    }

    /// Cell whose key is closest to `pos`. Ties go to the smaller position.
    pub fn nearest_cell(&self, pos: Position) -> Option<&Cell> {
        self.cells
            .iter()
            .min_by(|(a, _), (b, _)| {
                a.distance_squared(pos)
                    .total_cmp(&b.distance_squared(pos))
                    .then_with(|| a.cmp(b))
            })
            .map(|(_, cell)| cell)
    }

    /// Cells whose key lies within `radius` of `pos`, nearest first. A
    /// negative or NaN radius matches nothing.
    pub fn cells_within(&self, pos: Position, radius: f64) -> Vec<&Cell> {
        if radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }
        let limit = radius * radius;
        let mut found: Vec<(f64, &Position, &Cell)> = self
            .cells
            .iter()
            .map(|(key, cell)| (key.distance_squared(pos), key, cell))
            .filter(|(dist, _, _)| *dist <= limit)
            .collect();
        found.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        found.into_iter().map(|(_, _, cell)| cell).collect()
    }

    pub fn players_at(&self, pos: Position) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.values().filter(|p| p.pos == pos).collect();
        players.sort_by_key(|p| p.id);
        players
    }

    /// Keys whose cell reports a different position, sorted.
    pub fn misplaced_cells(&self) -> Vec<Position> {
        let mut keys: Vec<Position> = self
            .cells
            .iter()
            .filter(|(key, cell)| **key != cell.pos)
            .map(|(key, _)| *key)
            .collect();
        keys.sort();
        keys
    }

    /// Checks the invariants the data shapes leave to their owner. Cell
    /// types are only checked when a catalog is given.
    pub fn validate(&self, catalog: Option<&MaterialCatalog>) -> Result<(), WorldError> {
        let mut keys: Vec<&Position> = self.cells.keys().collect();
        keys.sort();
        for key in keys {
            let cell = &self.cells[key];
            if *key != cell.pos {
                return Err(WorldError::MisplacedCell {
                    key: *key,
                    found: cell.pos,
                });
            }
            if let Some(catalog) = catalog {
                if !catalog.contains(&cell.ty) {
                    return Err(WorldError::UnknownCellType {
                        pos: *key,
                        ty: cell.ty.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> WorldSummary {
        let mut amount_by_type = BTreeMap::new();
        for cell in self.cells.values() {
            *amount_by_type.entry(cell.ty.clone()).or_insert(0.0) += cell.amount;
        }
        WorldSummary {
            cell_count: self.cell_count(),
            player_count: self.player_count(),
            amount_by_type,
            misplaced_cells: self.misplaced_cells(),
        }
    }
}
