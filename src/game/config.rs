//! Session configuration.

use crate::game::axes::{AXIS_CATALOG, Axis};

/// Fewest players that can start a game.
pub const MIN_PLAYERS: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Trait axes to draw X and Y from.
    pub axis_catalog: &'static [Axis],
    pub min_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            axis_catalog: AXIS_CATALOG,
            min_players: MIN_PLAYERS,
        }
    }
}
