//! The cave-dwelling monster and its wound state.

use serde::{Deserialize, Serialize};

use crate::constants::MONSTER_HITS_TO_KILL;

/// A stationary monster. It takes two arrow hits to put one down; a
/// monster that has taken exactly one hit is wounded, which gives an
/// explorer walking in a chance to slip away.
///
/// A monster lives inline in the cave that hosts it; there is no removal
/// on death, the alive check covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Monster {
    hits: u8,
}

impl Monster {
    /// A fresh, unwounded monster.
    #[must_use]
    pub const fn new() -> Self {
        Self { hits: 0 }
    }

    /// Number of arrow hits the monster has taken.
    #[must_use]
    pub const fn hits(&self) -> u8 {
        self.hits
    }

    /// Whether the monster is still a threat.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hits < MONSTER_HITS_TO_KILL
    }

    /// Register one arrow hit.
    pub(crate) fn strike(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }
}
