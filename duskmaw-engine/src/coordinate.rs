//! Grid coordinates and the four cardinal directions.

use serde::{Deserialize, Serialize};

/// A (row, column) position in the cave grid. Row 0 is the northern edge
/// and rows grow southward; column 0 is the western edge and columns grow
/// eastward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    /// Construct a coordinate from its row and column.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row-major index of this coordinate inside a grid with the given
    /// column count.
    pub(crate) const fn index(self, columns: usize) -> usize {
        self.row * columns + self.column
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One of the four cardinal directions a passage can leave a cave in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in slot order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Neighbor-slot index for this direction.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// Classify the direction from `from` toward `to` on a grid of the
    /// given dimensions, treating offsets whose magnitude exceeds one as
    /// wrap-around and renormalizing them to ±1. Returns `None` when the
    /// two coordinates are not grid-adjacent under that rule.
    #[must_use]
    pub fn between(from: Coordinate, to: Coordinate, rows: usize, columns: usize) -> Option<Self> {
        let mut d_row = to.row as i64 - from.row as i64;
        if d_row < -1 {
            d_row += rows as i64;
        }
        if d_row > 1 {
            d_row -= rows as i64;
        }

        let mut d_column = to.column as i64 - from.column as i64;
        if d_column < -1 {
            d_column += columns as i64;
        }
        if d_column > 1 {
            d_column -= columns as i64;
        }

        match (d_row, d_column) {
            (-1, 0) => Some(Self::North),
            (1, 0) => Some(Self::South),
            (0, 1) => Some(Self::East),
            (0, -1) => Some(Self::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        write!(f, "{name}")
    }
}
