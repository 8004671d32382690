//! A single cave node: passages, treasure, arrow, monster.

use smallvec::SmallVec;

use crate::coordinate::{Coordinate, Direction};
use crate::monster::Monster;
use crate::treasure::Treasure;

/// Bounded neighbor list, at most one passage per cardinal direction.
pub type NeighborSet = SmallVec<[Coordinate; 4]>;

/// One location in the grid. A cave with exactly two passages is a
/// junction (a tunnel): it can never hold treasure, and arrows curve
/// through it in flight. Passages are fixed once the maze is carved;
/// contents are cleared and restocked on reset.
#[derive(Debug, Clone, Default)]
pub struct Cave {
    neighbors: [Option<Coordinate>; 4],
    treasure: SmallVec<[Treasure; 4]>,
    has_arrow: bool,
    monster: Option<Monster>,
}

impl Cave {
    /// Neighbor reached by leaving in `direction`, when a passage exists.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<Coordinate> {
        self.neighbors[direction.slot()]
    }

    /// All neighboring coordinates, in direction-slot order.
    #[must_use]
    pub fn neighbors(&self) -> NeighborSet {
        self.neighbors.iter().flatten().copied().collect()
    }

    /// Number of passages out of this cave.
    #[must_use]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    /// A junction has exactly two passages.
    #[must_use]
    pub fn is_junction(&self) -> bool {
        self.neighbor_count() == 2
    }

    /// Record a passage toward `neighbor`. Each directional slot is set at
    /// most once during maze carving.
    pub(crate) fn set_neighbor(&mut self, direction: Direction, neighbor: Coordinate) {
        debug_assert!(
            self.neighbors[direction.slot()].is_none(),
            "passage {direction} already carved"
        );
        self.neighbors[direction.slot()] = Some(neighbor);
    }

    /// Treasure currently resting in the cave.
    #[must_use]
    pub fn treasure(&self) -> &[Treasure] {
        &self.treasure
    }

    pub(crate) fn add_treasure(&mut self, treasure: Treasure) {
        debug_assert!(!self.is_junction(), "junctions cannot hold treasure");
        self.treasure.push(treasure);
    }

    /// Remove and return all treasure.
    pub(crate) fn take_treasure(&mut self) -> Vec<Treasure> {
        self.treasure.drain(..).collect()
    }

    /// Whether an arrow rests here.
    #[must_use]
    pub const fn has_arrow(&self) -> bool {
        self.has_arrow
    }

    pub(crate) fn place_arrow(&mut self) {
        self.has_arrow = true;
    }

    /// Remove the arrow if present; reports whether one was taken.
    pub(crate) fn take_arrow(&mut self) -> bool {
        std::mem::take(&mut self.has_arrow)
    }

    /// The monster hosted here, dead or alive.
    #[must_use]
    pub const fn monster(&self) -> Option<&Monster> {
        self.monster.as_ref()
    }

    pub(crate) fn monster_mut(&mut self) -> Option<&mut Monster> {
        self.monster.as_mut()
    }

    pub(crate) fn set_monster(&mut self, monster: Monster) {
        debug_assert!(self.monster.is_none(), "cave already hosts a monster");
        self.monster = Some(monster);
    }

    /// Whether a live monster occupies the cave.
    #[must_use]
    pub fn has_live_monster(&self) -> bool {
        self.monster.is_some_and(|monster| monster.is_alive())
    }

    /// Hits taken by the resident monster, zero when the cave is empty.
    #[must_use]
    pub fn monster_hits(&self) -> u8 {
        self.monster.map_or(0, |monster| monster.hits())
    }

    /// Drop all contents, keeping the carved passages.
    pub(crate) fn clear_contents(&mut self) {
        self.treasure.clear();
        self.has_arrow = false;
        self.monster = None;
    }
}
