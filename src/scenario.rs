use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    cell::Cell,
    material::MaterialCatalog,
    player::{Player, PlayerId, DEFAULT_BREATH, DEFAULT_ENERGY, DEFAULT_HEALTH, DEFAULT_SPEED},
    position::Position,
    world::World,
};

fn default_health() -> f64 {
    DEFAULT_HEALTH
}

fn default_speed() -> f64 {
    DEFAULT_SPEED
}

fn default_energy() -> f64 {
    DEFAULT_ENERGY
}

fn default_breath() -> f64 {
    DEFAULT_BREATH
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    /// CSV material table, relative to the loader's base directory.
    #[serde(default)]
    pub materials: Option<PathBuf>,
    #[serde(default)]
    pub grid: Option<GridFill>,
    #[serde(default)]
    pub cells: Vec<ScenarioCell>,
    #[serde(default)]
    pub players: Vec<ScenarioPlayer>,
}

/// Fills every integer coordinate of a `width` x `height` rectangle.
#[derive(Debug, Clone, Deserialize)]
pub struct GridFill {
    pub width: u32,
    pub height: u32,
    pub ty: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioCell {
    pub pos: Position,
    pub ty: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioPlayer {
    pub id: PlayerId,
    pub name: String,
    pub pos: Position,
    #[serde(default = "default_health")]
    pub health: f64,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_energy")]
    pub energy: f64,
    #[serde(default = "default_breath")]
    pub breath: f64,
}

impl From<&ScenarioPlayer> for Player {
    fn from(entry: &ScenarioPlayer) -> Self {
        Player {
            id: entry.id,
            name: entry.name.clone(),
            pos: entry.pos,
            health: entry.health,
            speed: entry.speed,
            energy: entry.energy,
            breath: entry.breath,
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .validate()
            .with_context(|| format!("Invalid scenario {}", path.display()))?;
        info!(
            scenario = %scenario.name,
            cells = scenario.cells.len(),
            players = scenario.players.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// The scenario's own material table, or the builtin one.
    pub fn load_catalog(&self, scenario: &Scenario) -> Result<MaterialCatalog> {
        match &scenario.materials {
            Some(file) => {
                let path = self.base_dir.join(file);
                MaterialCatalog::from_path(&path).with_context(|| {
                    format!("Failed to load material table {}", path.display())
                })
            }
            None => MaterialCatalog::builtin().context("Failed to load builtin material table"),
        }
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("scenario must define a name");
        }
        if let Some(grid) = &self.grid {
            if grid.width == 0 || grid.height == 0 {
                bail!(
                    "grid dimensions must be non-zero (got {}x{})",
                    grid.width,
                    grid.height
                );
            }
        }
        let mut seen = HashSet::new();
        for player in &self.players {
            if !seen.insert(player.id) {
                bail!("player id {} defined more than once", player.id);
            }
        }
        Ok(())
    }

    /// Grid fill first, then listed cells, then players.
    pub fn build_world(&self) -> World {
        let mut world = World::default();
        if let Some(grid) = &self.grid {
            for x in 0..grid.width {
                for y in 0..grid.height {
                    let pos = Position::new(f64::from(x), f64::from(y));
                    world.insert_cell(Cell::new(pos, grid.ty.clone(), grid.amount));
                }
            }
        }
        for cell in &self.cells {
            world.insert_cell(Cell::new(cell.pos, cell.ty.clone(), cell.amount));
        }
        for player in &self.players {
            if world.insert_player(Player::from(player)).is_some() {
                warn!(id = player.id, "duplicate player id; keeping the later entry");
            }
        }
        world
    }
}
