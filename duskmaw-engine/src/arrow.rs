//! Arrow ballistics. An arrow flies in a straight line through chambers,
//! curves through junctions, and wraps across toroidal borders; it only
//! strikes when it travels the full requested distance.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::dungeon::Dungeon;
use crate::error::ShotError;

/// Where an arrow ended up and what it did there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotOutcome {
    /// The cave the arrow came to rest in.
    pub resting: Coordinate,
    /// Steps actually traveled; less than the requested distance means
    /// the flight hit a wall early.
    pub traveled: u32,
    /// Whether a monster occupying the resting cave took the hit. Only a
    /// full-distance flight can strike.
    pub struck_monster: bool,
}

/// Directional offset from `from` to `to`, renormalized to ±1 when the
/// raw difference spans a wrap-around border.
fn offset_between(
    from: Coordinate,
    to: Coordinate,
    rows: usize,
    columns: usize,
) -> (i64, i64) {
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
    (d_row, d_column)
}

/// Apply a unit offset, wrapping modulo the grid dimensions.
fn apply_offset(
    coordinate: Coordinate,
    offset: (i64, i64),
    rows: usize,
    columns: usize,
) -> Coordinate {
    let row = (coordinate.row as i64 + offset.0).rem_euclid(rows as i64) as usize;
    let column = (coordinate.column as i64 + offset.1).rem_euclid(columns as i64) as usize;
    Coordinate::new(row, column)
}

/// Fire an arrow from `source` toward the adjacent cave `aim`, asking it
/// to travel `distance` caves.
///
/// The arrow keeps a current/next pair plus a running offset. Entering a
/// junction redirects the flight out of the junction's other passage;
/// everywhere else the offset carries it straight on, wrapping at the
/// borders. A missing passage stops the flight short, losing the arrow
/// without a strike.
///
/// # Errors
///
/// Returns [`ShotError`] when the distance is zero or `aim` is not
/// adjacent to `source`.
pub(crate) fn fire(
    dungeon: &mut Dungeon,
    distance: u32,
    aim: Coordinate,
    source: Coordinate,
) -> Result<ShotOutcome, ShotError> {
    if distance == 0 {
        return Err(ShotError::ZeroDistance);
    }
    if !dungeon.neighbors(source).contains(&aim) {
        return Err(ShotError::NotAdjacent { source, aim });
    }

    let (rows, columns) = dungeon.dimensions();
    let mut current = source;
    let mut next = aim;
    let mut offset = offset_between(current, next, rows, columns);
    let mut traveled = 0;

    for _ in 0..distance {
        if !dungeon.neighbors(current).contains(&next) {
            break;
        }
        let passages = dungeon.neighbors(next);
        if passages.len() == 2 {
            // Junction: curve out through the passage we did not enter by.
            let other = passages
                .iter()
                .copied()
                .find(|&neighbor| neighbor != current)
                .expect("junction has a second passage");
            offset = offset_between(next, other, rows, columns);
            current = next;
            next = other;
        } else {
            current = next;
            next = apply_offset(next, offset, rows, columns);
        }
        traveled += 1;
    }

    let struck_monster = traveled == distance && dungeon.strike_monster(current);
    Ok(ShotOutcome {
        resting: current,
        traveled,
        struck_monster,
    })
}
