use serde::{Deserialize, Serialize};

use crate::position::Position;

pub type PlayerId = u64;

pub const DEFAULT_HEALTH: f64 = 100.0;
pub const DEFAULT_SPEED: f64 = 10.0;
pub const DEFAULT_ENERGY: f64 = 4000.0;
pub const DEFAULT_BREATH: f64 = 100.0;

/// One participant. Fields are freely reassignable and carry no bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub pos: Position,
    pub health: f64,
    pub speed: f64,
    pub energy: f64,
    pub breath: f64,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, pos: Position) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            health: DEFAULT_HEALTH,
            speed: DEFAULT_SPEED,
            energy: DEFAULT_ENERGY,
            breath: DEFAULT_BREATH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let player = Player::new(7, "Ana", Position::new(0.0, 0.0));
        assert_eq!(player.id, 7);
        assert_eq!(player.name, "Ana");
        assert_eq!(player.health, 100.0);
        assert_eq!(player.speed, 10.0);
        assert_eq!(player.energy, 4000.0);
        assert_eq!(player.breath, 100.0);
    }

    #[test]
    fn fields_are_unbounded() {
        let mut player = Player::new(1, "Bo", Position::default());
        player.health = -25.0;
        player.energy += 1_000_000.0;
        assert_eq!(player.health, -25.0);
        assert_eq!(player.energy, 1_004_000.0);
    }
}
