//! Breadth-first reachability and the entry/exit pair selection.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::cave::Cave;
use crate::constants::MIN_ENTRY_EXIT_DISTANCE;
use crate::coordinate::Coordinate;
use crate::error::GenerationError;

/// Shortest-path distances from `from` to every cave, `None` where
/// unreachable. One BFS pass, O(rows x columns).
pub(crate) fn bfs_distances(
    caves: &[Cave],
    columns: usize,
    from: Coordinate,
) -> Vec<Option<u32>> {
    let mut distances = vec![None; caves.len()];
    distances[from.index(columns)] = Some(0);

    let mut frontier = VecDeque::new();
    frontier.push_back(from);
    while let Some(current) = frontier.pop_front() {
        let here = distances[current.index(columns)].unwrap_or(0);
        for neighbor in caves[current.index(columns)].neighbors() {
            let slot = &mut distances[neighbor.index(columns)];
            if slot.is_none() {
                *slot = Some(here + 1);
                frontier.push_back(neighbor);
            }
        }
    }
    distances
}

/// Pick an entry/exit pair of non-junction caves whose graph distance is
/// at least [`MIN_ENTRY_EXIT_DISTANCE`]. Candidates are scanned in
/// randomized order and the first qualifying pair wins; one BFS serves
/// all exit candidates of a given entry.
///
/// # Errors
///
/// Returns [`GenerationError::NoQualifyingPair`] when no two chamber
/// caves lie far enough apart, which only tiny or over-connected grids
/// can produce.
pub(crate) fn select_entry_and_exit(
    caves: &[Cave],
    columns: usize,
    rng: &mut impl Rng,
) -> Result<(Coordinate, Coordinate), GenerationError> {
    let mut candidates: Vec<Coordinate> = caves
        .iter()
        .enumerate()
        .filter(|(_, cave)| !cave.is_junction())
        .map(|(index, _)| Coordinate::new(index / columns, index % columns))
        .collect();
    candidates.shuffle(rng);

    for &entry in &candidates {
        let distances = bfs_distances(caves, columns, entry);
        let mut exits = candidates.clone();
        exits.shuffle(rng);
        for &exit in &exits {
            if exit == entry {
                continue;
            }
            if distances[exit.index(columns)]
                .is_some_and(|distance| distance >= MIN_ENTRY_EXIT_DISTANCE)
            {
                return Ok((entry, exit));
            }
        }
    }
    Err(GenerationError::NoQualifyingPair {
        min_distance: MIN_ENTRY_EXIT_DISTANCE,
    })
}
