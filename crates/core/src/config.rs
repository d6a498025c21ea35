//! Game configuration: grid dimensions and player labels.

use crate::types::{ConfigError, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};

/// Label of player 1 when none is given
pub const DEFAULT_PLAYER_ONE: &str = "yellow";

/// Label of player 2 when none is given
pub const DEFAULT_PLAYER_TWO: &str = "blue";

/// Settings fixed at game creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub player_one: String,
    pub player_two: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            player_one: DEFAULT_PLAYER_ONE.to_string(),
            player_two: DEFAULT_PLAYER_TWO.to_string(),
        }
    }
}

impl GameConfig {
    pub fn new(
        height: usize,
        width: usize,
        player_one: impl Into<String>,
        player_two: impl Into<String>,
    ) -> Self {
        Self {
            height,
            width,
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Check that a four-in-a-row fits along every axis and that the grid
    /// stays within [`MAX_DIMENSION`] on both.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("height", self.height)?;
        check_dimension("width", self.width)
    }
}

fn check_dimension(axis: &'static str, value: usize) -> Result<(), ConfigError> {
    if value < MIN_DIMENSION {
        return Err(ConfigError::DimensionTooSmall {
            axis,
            value,
            min: MIN_DIMENSION,
        });
    }
    if value > MAX_DIMENSION {
        return Err(ConfigError::DimensionTooLarge {
            axis,
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}
