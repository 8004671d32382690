//! Maze carving: randomized Kruskal over the grid's candidate edges,
//! followed by a controlled number of extra passages.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::cave::Cave;
use crate::coordinate::{Coordinate, Direction};
use crate::error::ConfigError;

/// Disjoint-set over cave indices, used for the Kruskal connectivity
/// checks.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            // Path halving keeps the trees shallow.
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Merge the components of `a` and `b`; reports whether they were
    /// separate beforehand.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        true
    }
}

/// Every unordered candidate pair: grid-adjacent neighbors, plus the
/// border-to-opposite-border pairs when wrapping is on. Wrap pairs that
/// would duplicate a grid pair (2-wide dimensions) or degenerate into a
/// self-loop (1-wide dimensions) are left out.
pub(crate) fn candidate_edges(
    rows: usize,
    columns: usize,
    wrapping: bool,
) -> Vec<(Coordinate, Coordinate)> {
    let mut edges = Vec::new();
    for row in 0..rows {
        for column in 0..columns {
            if row + 1 < rows {
                edges.push((Coordinate::new(row, column), Coordinate::new(row + 1, column)));
            }
            if column + 1 < columns {
                edges.push((Coordinate::new(row, column), Coordinate::new(row, column + 1)));
            }
        }
    }
    if wrapping {
        if rows > 2 {
            for column in 0..columns {
                edges.push((Coordinate::new(0, column), Coordinate::new(rows - 1, column)));
            }
        }
        if columns > 2 {
            for row in 0..rows {
                edges.push((Coordinate::new(row, 0), Coordinate::new(row, columns - 1)));
            }
        }
    }
    edges
}

/// Record the passage on both endpoints, each under the correct
/// directional slot.
pub(crate) fn link(caves: &mut [Cave], rows: usize, columns: usize, a: Coordinate, b: Coordinate) {
    let direction =
        Direction::between(a, b, rows, columns).expect("candidate edges are grid-adjacent");
    caves[a.index(columns)].set_neighbor(direction, b);
    caves[b.index(columns)].set_neighbor(direction.opposite(), a);
}

/// Carve the maze into `caves`: a spanning structure from randomized
/// Kruskal selection, then exactly `interconnectivity` extra passages
/// taken from the discarded candidates.
///
/// # Errors
///
/// Returns [`ConfigError::Interconnectivity`] when more extra passages
/// are requested than the discard pool can supply.
pub(crate) fn carve(
    caves: &mut [Cave],
    rows: usize,
    columns: usize,
    interconnectivity: usize,
    wrapping: bool,
    rng: &mut impl Rng,
) -> Result<(), ConfigError> {
    let mut edges = candidate_edges(rows, columns, wrapping);
    edges.shuffle(rng);

    let mut components = DisjointSet::new(rows * columns);
    let mut discarded = Vec::new();
    for (a, b) in edges {
        if components.union(a.index(columns), b.index(columns)) {
            link(caves, rows, columns, a, b);
        } else {
            discarded.push((a, b));
        }
    }

    if interconnectivity > discarded.len() {
        return Err(ConfigError::Interconnectivity {
            requested: interconnectivity,
            available: discarded.len(),
        });
    }

    // The discard pool inherits the shuffle, so a prefix is already a
    // uniform draw.
    for &(a, b) in discarded.iter().take(interconnectivity) {
        link(caves, rows, columns, a, b);
    }
    Ok(())
}
