//! Duskmaw Rules Engine
//!
//! Platform-agnostic core rules for the Duskmaw cave-crawl: maze
//! generation over a grid of caves (wrapping or bounded), stocking with
//! treasure, arrows and monsters, arrow ballistics through winding
//! passages, and the explorer's movement, combat and victory rules.
//! This crate carries no UI or I/O; fronts drive it through [`Dungeon`]
//! and [`Explorer`].

pub mod arrow;
pub mod cave;
pub mod config;
pub mod constants;
pub mod coordinate;
pub mod dungeon;
pub mod error;
pub mod explorer;
mod maze;
pub mod monster;
mod path;
mod placement;
pub mod rng;
pub mod treasure;

// Re-export commonly used types
pub use arrow::ShotOutcome;
pub use cave::{Cave, NeighborSet};
pub use config::DungeonConfig;
pub use coordinate::{Coordinate, Direction};
pub use dungeon::{Dungeon, Smell};
pub use error::{BuildError, ConfigError, ExplorerError, GenerationError, ShotError};
pub use explorer::Explorer;
pub use monster::Monster;
pub use rng::{CountingRng, RngBundle};
pub use treasure::{GemKind, GemQuality, Treasure};
