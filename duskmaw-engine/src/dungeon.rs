//! The dungeon: a fixed grid of caves with carved passages, an entry and
//! an exit, and the contents the distributor stocked it with.

use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::arrow::{self, ShotOutcome};
use crate::cave::{Cave, NeighborSet};
use crate::config::DungeonConfig;
use crate::coordinate::{Coordinate, Direction};
use crate::error::{BuildError, ConfigError, ShotError};
use crate::maze;
use crate::path;
use crate::placement;
use crate::rng::RngBundle;
use crate::treasure::Treasure;

/// Strength of the monster stench reaching a cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smell {
    /// No live monster within two steps.
    None,
    /// Exactly one live monster two steps away.
    Weak,
    /// A live monster here or next door, or several two steps away.
    Strong,
}

/// A generated dungeon. Passages, entry and exit are fixed for the
/// lifetime of the value; contents change through pickups, strikes and
/// [`Dungeon::reset`].
///
/// Coordinates handed to queries must lie inside the grid; the engine
/// only ever reports in-bounds coordinates back to callers.
#[derive(Debug)]
pub struct Dungeon {
    rows: usize,
    columns: usize,
    caves: Vec<Cave>,
    entry: Coordinate,
    exit: Coordinate,
    config: DungeonConfig,
    rng: Rc<RngBundle>,
}

impl Dungeon {
    /// Generate a dungeon from the config, drawing all randomness from
    /// the supplied bundle: carve the maze, pick entry and exit, stock
    /// the contents.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] for out-of-bounds parameters, impossible
    /// interconnectivity, monster overflow, or a maze without a far
    /// enough entry/exit pair.
    pub fn generate(config: DungeonConfig, rng: Rc<RngBundle>) -> Result<Self, BuildError> {
        config.validate()?;
        let (rows, columns) = (config.rows, config.columns);

        let mut caves = vec![Cave::default(); config.cave_count()];
        maze::carve(
            &mut caves,
            rows,
            columns,
            config.interconnectivity,
            config.wrapping,
            &mut *rng.maze(),
        )?;
        let (entry, exit) = path::select_entry_and_exit(&caves, columns, &mut *rng.placement())?;

        let mut dungeon = Self {
            rows,
            columns,
            caves,
            entry,
            exit,
            config,
            rng,
        };
        dungeon.distribute()?;
        Ok(dungeon)
    }

    /// [`Dungeon::generate`] with a bundle built from the given seed.
    ///
    /// # Errors
    ///
    /// Same failures as [`Dungeon::generate`].
    pub fn from_seed(config: DungeonConfig, seed: u64) -> Result<Self, BuildError> {
        Self::generate(config, Rc::new(RngBundle::from_user_seed(seed)))
    }

    fn distribute(&mut self) -> Result<(), ConfigError> {
        let rng = Rc::clone(&self.rng);
        let mut stream = rng.placement();
        placement::stock_treasure(&mut self.caves, self.config.treasure_percent, &mut *stream);
        placement::stock_arrows(&mut self.caves, self.config.treasure_percent, &mut *stream);
        placement::station_monsters(
            &mut self.caves,
            self.columns,
            self.entry,
            self.exit,
            self.config.monster_count,
            &mut *stream,
        )
    }

    fn cave(&self, coordinate: Coordinate) -> &Cave {
        assert!(
            coordinate.row < self.rows && coordinate.column < self.columns,
            "coordinate {coordinate} outside the {}x{} grid",
            self.rows,
            self.columns
        );
        &self.caves[coordinate.index(self.columns)]
    }

    fn cave_mut(&mut self, coordinate: Coordinate) -> &mut Cave {
        assert!(
            coordinate.row < self.rows && coordinate.column < self.columns,
            "coordinate {coordinate} outside the {}x{} grid",
            self.rows,
            self.columns
        );
        &mut self.caves[coordinate.index(self.columns)]
    }

    /// Grid dimensions as (rows, columns).
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// The cave explorers start from.
    #[must_use]
    pub const fn entry(&self) -> Coordinate {
        self.entry
    }

    /// The goal cave; it always hosts one of the monsters.
    #[must_use]
    pub const fn exit(&self) -> Coordinate {
        self.exit
    }

    /// The configuration the dungeon was generated from.
    #[must_use]
    pub const fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// The randomness bundle driving this dungeon.
    #[must_use]
    pub fn rng_bundle(&self) -> Rc<RngBundle> {
        Rc::clone(&self.rng)
    }

    /// All caves reachable in one step from `coordinate`.
    #[must_use]
    pub fn neighbors(&self, coordinate: Coordinate) -> NeighborSet {
        self.cave(coordinate).neighbors()
    }

    /// The neighbor in a given direction, when that passage exists.
    #[must_use]
    pub fn neighbor_toward(&self, coordinate: Coordinate, direction: Direction) -> Option<Coordinate> {
        self.cave(coordinate).neighbor(direction)
    }

    /// Whether the cave is a junction (exactly two passages).
    #[must_use]
    pub fn is_junction(&self, coordinate: Coordinate) -> bool {
        self.cave(coordinate).is_junction()
    }

    /// Treasure lying in the cave.
    #[must_use]
    pub fn treasure_at(&self, coordinate: Coordinate) -> &[Treasure] {
        self.cave(coordinate).treasure()
    }

    /// Remove and return all treasure in the cave.
    pub fn take_treasure(&mut self, coordinate: Coordinate) -> Vec<Treasure> {
        self.cave_mut(coordinate).take_treasure()
    }

    /// Whether an arrow rests in the cave.
    #[must_use]
    pub fn has_arrow(&self, coordinate: Coordinate) -> bool {
        self.cave(coordinate).has_arrow()
    }

    /// Remove the arrow from the cave; reports whether one was taken.
    pub fn take_arrow(&mut self, coordinate: Coordinate) -> bool {
        self.cave_mut(coordinate).take_arrow()
    }

    /// Whether a live monster occupies the cave.
    #[must_use]
    pub fn has_live_monster(&self, coordinate: Coordinate) -> bool {
        self.cave(coordinate).has_live_monster()
    }

    /// Arrow hits taken by the monster in the cave, zero when empty.
    #[must_use]
    pub fn monster_hits(&self, coordinate: Coordinate) -> u8 {
        self.cave(coordinate).monster_hits()
    }

    /// Register an arrow hit on whatever monster rests in the cave;
    /// reports whether one was there to take it.
    pub(crate) fn strike_monster(&mut self, coordinate: Coordinate) -> bool {
        match self.cave_mut(coordinate).monster_mut() {
            Some(monster) => {
                monster.strike();
                true
            }
            None => false,
        }
    }

    /// Fire an arrow from `source` toward the adjacent cave `aim`.
    ///
    /// # Errors
    ///
    /// Returns [`ShotError`] when the distance is zero or the first step
    /// has no passage.
    pub fn fire(
        &mut self,
        distance: u32,
        aim: Coordinate,
        source: Coordinate,
    ) -> Result<ShotOutcome, ShotError> {
        arrow::fire(self, distance, aim, source)
    }

    /// Shortest-path distance between two caves, `None` if unreachable.
    #[must_use]
    pub fn shortest_distance(&self, from: Coordinate, to: Coordinate) -> Option<u32> {
        path::bfs_distances(&self.caves, self.columns, from)[to.index(self.columns)]
    }

    /// The monster stench at a cave: strong for a live monster here or
    /// one step away; otherwise graded by how many distinct caves two
    /// steps away host one.
    #[must_use]
    pub fn smell_at(&self, coordinate: Coordinate) -> Smell {
        if self.has_live_monster(coordinate) {
            return Smell::Strong;
        }
        let ring = self.neighbors(coordinate);
        for &near in &ring {
            if self.has_live_monster(near) {
                return Smell::Strong;
            }
        }

        let mut outer: HashSet<Coordinate> = HashSet::new();
        for &near in &ring {
            outer.extend(self.neighbors(near));
        }
        // Live monsters at distance one (or here) were caught above, so
        // the survivors of this count are exactly two steps out.
        let scent_sources = outer
            .iter()
            .filter(|&&far| self.has_live_monster(far))
            .count();
        match scent_sources {
            0 => Smell::None,
            1 => Smell::Weak,
            _ => Smell::Strong,
        }
    }

    /// Clear every cave and stock the dungeon again under the same
    /// constraints. Passages, entry and exit are untouched; the new
    /// contents are fresh draws, not a replay.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the retained parameters cannot be
    /// satisfied, which a previously generated dungeon never triggers.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        for cave in &mut self.caves {
            cave.clear_contents();
        }
        self.distribute()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::{dungeon_from_edges, put_monster};

    fn config_8x8(interconnectivity: usize) -> DungeonConfig {
        let mut config = DungeonConfig::new(8, 8);
        config.interconnectivity = interconnectivity;
        config
    }

    #[test]
    fn generate_wires_entry_exit_and_monster() {
        let dungeon = Dungeon::from_seed(config_8x8(2), 42).unwrap();
        assert_eq!(dungeon.dimensions(), (8, 8));
        assert!(!dungeon.is_junction(dungeon.entry()));
        assert!(!dungeon.is_junction(dungeon.exit()));
        assert!(dungeon.shortest_distance(dungeon.entry(), dungeon.exit()) >= Some(5));
        assert!(dungeon.has_live_monster(dungeon.exit()));
        assert_eq!(dungeon.monster_hits(dungeon.exit()), 0);
    }

    #[test]
    fn generation_is_reproducible_for_a_seed() {
        let one = Dungeon::from_seed(config_8x8(3), 7).unwrap();
        let two = Dungeon::from_seed(config_8x8(3), 7).unwrap();
        assert_eq!(one.entry(), two.entry());
        assert_eq!(one.exit(), two.exit());
        for row in 0..8 {
            for column in 0..8 {
                let at = Coordinate::new(row, column);
                assert_eq!(one.neighbors(at), two.neighbors(at));
                assert_eq!(one.treasure_at(at), two.treasure_at(at));
                assert_eq!(one.has_arrow(at), two.has_arrow(at));
            }
        }
    }

    #[test]
    fn smell_grades_by_distance_and_count() {
        // A plus-shape: four arm chambers around a hub.
        let edges = [
            ((1, 1), (0, 1)),
            ((1, 1), (2, 1)),
            ((1, 1), (1, 0)),
            ((1, 1), (1, 2)),
        ];
        let mut dungeon = dungeon_from_edges(3, 3, &edges, (1, 0), (0, 1));
        put_monster(&mut dungeon, (0, 1));

        assert_eq!(dungeon.smell_at(Coordinate::new(0, 1)), Smell::Strong);
        assert_eq!(dungeon.smell_at(Coordinate::new(1, 1)), Smell::Strong);
        // Arms other than the host are two steps out: one source, weak.
        assert_eq!(dungeon.smell_at(Coordinate::new(1, 0)), Smell::Weak);
        assert_eq!(dungeon.smell_at(Coordinate::new(1, 2)), Smell::Weak);

        // A second monster on another arm pushes the far arms to strong.
        put_monster(&mut dungeon, (2, 1));
        assert_eq!(dungeon.smell_at(Coordinate::new(1, 0)), Smell::Strong);
    }

    #[test]
    fn smell_fades_past_two_steps_and_with_dead_monsters() {
        let edges = [
            ((0, 0), (0, 1)),
            ((0, 1), (0, 2)),
            ((0, 2), (0, 3)),
            ((0, 3), (0, 4)),
            ((0, 4), (0, 5)),
            ((0, 5), (0, 6)),
        ];
        let mut dungeon = dungeon_from_edges(1, 7, &edges, (0, 0), (0, 6));
        put_monster(&mut dungeon, (0, 6));

        assert_eq!(dungeon.smell_at(Coordinate::new(0, 5)), Smell::Strong);
        assert_eq!(dungeon.smell_at(Coordinate::new(0, 4)), Smell::Weak);
        assert_eq!(dungeon.smell_at(Coordinate::new(0, 3)), Smell::None);

        // Two strikes kill the monster and the stench with it.
        assert!(dungeon.strike_monster(Coordinate::new(0, 6)));
        assert!(dungeon.strike_monster(Coordinate::new(0, 6)));
        assert_eq!(dungeon.smell_at(Coordinate::new(0, 5)), Smell::None);
        assert_eq!(dungeon.smell_at(Coordinate::new(0, 6)), Smell::None);
    }

    #[test]
    fn reset_keeps_passages_and_restocks_contents() {
        let mut config = config_8x8(2);
        config.treasure_percent = 100;
        config.monster_count = 2;
        let mut dungeon = Dungeon::from_seed(config, 17).unwrap();

        let entry = dungeon.entry();
        let exit = dungeon.exit();
        let passages: Vec<NeighborSet> = (0..64)
            .map(|index| dungeon.neighbors(Coordinate::new(index / 8, index % 8)))
            .collect();

        // Disturb the contents, then reset.
        let _ = dungeon.take_treasure(entry);
        let _ = dungeon.take_arrow(entry);
        assert!(dungeon.strike_monster(exit));
        dungeon.reset().unwrap();

        assert_eq!(dungeon.entry(), entry);
        assert_eq!(dungeon.exit(), exit);
        for (index, expected) in passages.iter().enumerate() {
            let at = Coordinate::new(index / 8, index % 8);
            assert_eq!(&dungeon.neighbors(at), expected);
        }
        // Full restock under percent 100: every cave has an arrow again,
        // and the exit monster is fresh.
        assert!(dungeon.has_arrow(entry));
        assert_eq!(dungeon.monster_hits(exit), 0);
        let monsters = (0..64)
            .filter(|index| dungeon.has_live_monster(Coordinate::new(index / 8, index % 8)))
            .count();
        assert_eq!(monsters, 2);
    }

    #[test]
    fn one_step_shot_lands_next_door() {
        let mut dungeon = Dungeon::from_seed(config_8x8(4), 9).unwrap();
        let source = dungeon.entry();
        let aim = dungeon.neighbors(source)[0];
        let outcome = dungeon.fire(1, aim, source).unwrap();
        assert_eq!(outcome.resting, aim);
        assert_eq!(outcome.traveled, 1);
    }
}
