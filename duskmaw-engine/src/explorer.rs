//! The explorer: position, inventory, and the combat and victory rules
//! that fire as they move through a [`Dungeon`].

use rand::Rng;

use crate::arrow::ShotOutcome;
use crate::cave::NeighborSet;
use crate::constants::{STARTING_ARROWS, WOUNDED_MONSTER_ESCAPE_CHANCE};
use crate::coordinate::{Coordinate, Direction};
use crate::dungeon::{Dungeon, Smell};
use crate::error::{ConfigError, ExplorerError, ShotError};
use crate::treasure::Treasure;

/// A named traveler inside a dungeon. All dungeon mutation flows through
/// these methods; a dead explorer refuses everything except [`reset`].
///
/// [`reset`]: Explorer::reset
#[derive(Debug, Clone)]
pub struct Explorer {
    name: String,
    coordinate: Coordinate,
    treasure: Vec<Treasure>,
    arrows: u32,
    alive: bool,
    won: bool,
}

impl Explorer {
    /// Place a new explorer at the dungeon entry with the standard
    /// arrow allotment and empty pockets.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::BlankName`] for an empty or
    /// whitespace-only name.
    pub fn new(name: impl Into<String>, dungeon: &Dungeon) -> Result<Self, ExplorerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ExplorerError::BlankName);
        }
        Ok(Self {
            name,
            coordinate: dungeon.entry(),
            treasure: Vec::new(),
            arrows: STARTING_ARROWS,
            alive: true,
            won: false,
        })
    }

    fn ensure_alive(&self) -> Result<(), ExplorerError> {
        if self.alive {
            Ok(())
        } else {
            Err(ExplorerError::Dead)
        }
    }

    /// Step into an adjacent cave. Returns `Ok(false)` without moving
    /// when `target` is not one step away. On entering a cave with a
    /// live monster the explorer dies outright against an unwounded one
    /// and escapes a wounded one half the time; surviving at the exit
    /// wins the expedition.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Dead`] when the explorer is dead.
    pub fn move_to(&mut self, target: Coordinate, dungeon: &Dungeon) -> Result<bool, ExplorerError> {
        self.ensure_alive()?;
        if !dungeon.neighbors(self.coordinate).contains(&target) {
            return Ok(false);
        }
        self.coordinate = target;

        if dungeon.has_live_monster(target) {
            let survives = dungeon.monster_hits(target) > 0
                && dungeon
                    .rng_bundle()
                    .combat()
                    .gen_bool(WOUNDED_MONSTER_ESCAPE_CHANCE);
            if !survives {
                self.alive = false;
                return Ok(true);
            }
        }
        if target == dungeon.exit() {
            self.won = true;
        }
        Ok(true)
    }

    /// Pocket all treasure in the current cave; reports whether any was
    /// there.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Dead`] when the explorer is dead.
    pub fn pick_up_treasure(&mut self, dungeon: &mut Dungeon) -> Result<bool, ExplorerError> {
        self.ensure_alive()?;
        let found = dungeon.take_treasure(self.coordinate);
        let any = !found.is_empty();
        self.treasure.extend(found);
        Ok(any)
    }

    /// Pick up the arrow in the current cave, if one rests there.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Dead`] when the explorer is dead.
    pub fn pick_up_arrow(&mut self, dungeon: &mut Dungeon) -> Result<bool, ExplorerError> {
        self.ensure_alive()?;
        if dungeon.take_arrow(self.coordinate) {
            self.arrows += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Shoot an arrow `distance` caves in `direction`. The arrow is
    /// spent whenever the shot is actually released, struck or not.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Dead`], [`ExplorerError::OutOfArrows`],
    /// or a [`ShotError`] for a blocked or zero-length shot, none of
    /// which spend an arrow.
    pub fn shoot(
        &mut self,
        distance: u32,
        direction: Direction,
        dungeon: &mut Dungeon,
    ) -> Result<ShotOutcome, ExplorerError> {
        self.ensure_alive()?;
        if self.arrows == 0 {
            return Err(ExplorerError::OutOfArrows);
        }
        let aim = dungeon
            .neighbor_toward(self.coordinate, direction)
            .ok_or(ShotError::NoPassage {
                from: self.coordinate,
                direction,
            })?;
        let outcome = dungeon.fire(distance, aim, self.coordinate)?;
        self.arrows -= 1;
        Ok(outcome)
    }

    /// The stench reaching the explorer's cave.
    #[must_use]
    pub fn smell(&self, dungeon: &Dungeon) -> Smell {
        dungeon.smell_at(self.coordinate)
    }

    /// Caves reachable in one step from here.
    #[must_use]
    pub fn possible_moves(&self, dungeon: &Dungeon) -> NeighborSet {
        dungeon.neighbors(self.coordinate)
    }

    /// Treasure lying in the current cave.
    #[must_use]
    pub fn treasure_at_location<'a>(&self, dungeon: &'a Dungeon) -> &'a [Treasure] {
        dungeon.treasure_at(self.coordinate)
    }

    /// Whether an arrow rests in the current cave.
    #[must_use]
    pub fn arrow_at_location(&self, dungeon: &Dungeon) -> bool {
        dungeon.has_arrow(self.coordinate)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Gems collected so far.
    #[must_use]
    pub fn treasure(&self) -> &[Treasure] {
        &self.treasure
    }

    #[must_use]
    pub const fn arrow_count(&self) -> u32 {
        self.arrows
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.won
    }

    /// Start the expedition over: restock the dungeon, return to the
    /// entry, restore arrows and drop all treasure. Works on a dead
    /// explorer; it is the one way back.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from the dungeon restock, which a
    /// previously generated dungeon never produces.
    pub fn reset(&mut self, dungeon: &mut Dungeon) -> Result<(), ConfigError> {
        dungeon.reset()?;
        self.coordinate = dungeon.entry();
        self.treasure.clear();
        self.arrows = STARTING_ARROWS;
        self.alive = true;
        self.won = false;
        Ok(())
    }
}
