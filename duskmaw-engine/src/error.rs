//! Typed failures surfaced by the engine. Nothing is retried internally;
//! an impossible configuration fails once and immediately.

use thiserror::Error;

use crate::coordinate::{Coordinate, Direction};

/// Invalid or geometrically impossible construction parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rows and columns must be positive (got {rows}x{columns})")]
    Dimensions { rows: usize, columns: usize },
    #[error("treasure percentage must be within 1..=100 (got {0})")]
    TreasurePercent(u32),
    #[error("at least one monster must be placed")]
    NoMonsters,
    #[error("interconnectivity {requested} exceeds the {available} leftover candidate edges")]
    Interconnectivity { requested: usize, available: usize },
    #[error("{requested} monsters exceed the {available} caves able to host one")]
    MonsterCapacity { requested: usize, available: usize },
}

/// The maze offered no entry/exit pair far enough apart. Fatal: the
/// distance floor is never relaxed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no entry/exit pair with a path of at least {min_distance} steps exists")]
    NoQualifyingPair { min_distance: u32 },
}

/// A shot that could not be taken as requested.
// Implemented by hand: thiserror's derive treats a field named `source` as
// the error source, but `NotAdjacent::source` is a coordinate, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotError {
    ZeroDistance,
    NotAdjacent { source: Coordinate, aim: Coordinate },
    NoPassage { from: Coordinate, direction: Direction },
}

impl std::fmt::Display for ShotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShotError::ZeroDistance => write!(f, "shot distance must be positive"),
            ShotError::NotAdjacent { source, aim } => {
                write!(f, "{aim} is not reachable from {source} in one step")
            }
            ShotError::NoPassage { from, direction } => {
                write!(f, "no passage {direction} out of {from}")
            }
        }
    }
}

impl std::error::Error for ShotError {}

/// An explorer action that could not be performed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    #[error("explorer name cannot be blank")]
    BlankName,
    #[error("the explorer is dead; only reset is possible")]
    Dead,
    #[error("no arrows left to shoot")]
    OutOfArrows,
    #[error(transparent)]
    Shot(#[from] ShotError),
}

/// Anything that can go wrong while building a dungeon.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
