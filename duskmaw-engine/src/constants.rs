//! Engine-wide tuning constants.

/// Minimum graph distance between the chosen entry and exit caves.
pub const MIN_ENTRY_EXIT_DISTANCE: u32 = 5;

/// Arrows an explorer carries when first entering the maze.
pub const STARTING_ARROWS: u32 = 3;

/// Arrow hits required to put a monster down.
pub const MONSTER_HITS_TO_KILL: u8 = 2;

/// Chance that an explorer escapes a wounded monster's cave alive.
pub const WOUNDED_MONSTER_ESCAPE_CHANCE: f64 = 0.5;
