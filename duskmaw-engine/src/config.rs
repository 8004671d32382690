//! Construction parameters for a dungeon.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters describing the dungeon to generate. Dimensions are
/// mandatory; everything else falls back to a sensible default when
/// omitted from serialized input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Grid height, in caves.
    pub rows: usize,
    /// Grid width, in caves.
    pub columns: usize,
    /// Extra passages carved beyond the spanning structure, creating
    /// cycles and alternate routes.
    #[serde(default)]
    pub interconnectivity: usize,
    /// Whether border caves connect to the opposite border (toroidal
    /// topology).
    #[serde(default)]
    pub wrapping: bool,
    /// Percentage of caves stocked with treasure and arrows.
    #[serde(default = "DungeonConfig::default_treasure_percent")]
    pub treasure_percent: u32,
    /// Monsters placed in the maze; the exit always hosts one of them.
    #[serde(default = "DungeonConfig::default_monster_count")]
    pub monster_count: usize,
}

impl DungeonConfig {
    const fn default_treasure_percent() -> u32 {
        50
    }

    const fn default_monster_count() -> usize {
        1
    }

    /// Config for a `rows` x `columns` grid with all other parameters at
    /// their defaults.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            interconnectivity: 0,
            wrapping: false,
            treasure_percent: Self::default_treasure_percent(),
            monster_count: Self::default_monster_count(),
        }
    }

    /// Parse a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the parameter bounds that can be judged without looking at
    /// the generated maze. Geometric impossibilities (interconnectivity
    /// beyond the leftover edges, monster overflow) surface later, from
    /// generation itself.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Dimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.treasure_percent == 0 || self.treasure_percent > 100 {
            return Err(ConfigError::TreasurePercent(self.treasure_percent));
        }
        if self.monster_count == 0 {
            return Err(ConfigError::NoMonsters);
        }
        Ok(())
    }

    /// Total number of caves in the grid.
    #[must_use]
    pub const fn cave_count(&self) -> usize {
        self.rows * self.columns
    }
}
