//! Content distribution: treasure, arrows, and monsters, placed under
//! the configured percentage and count constraints.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::cave::Cave;
use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use crate::monster::Monster;
use crate::treasure::Treasure;

fn chamber_indices(caves: &[Cave]) -> Vec<usize> {
    caves
        .iter()
        .enumerate()
        .filter(|(_, cave)| !cave.is_junction())
        .map(|(index, _)| index)
        .collect()
}

/// Place one arrow in a `percent` share of all caves, junctions included.
pub(crate) fn stock_arrows(caves: &mut [Cave], percent: u32, rng: &mut impl Rng) {
    let mut order: Vec<usize> = (0..caves.len()).collect();
    order.shuffle(rng);
    let stocked = percent as usize * caves.len() / 100;
    for &index in order.iter().take(stocked) {
        caves[index].place_arrow();
    }
}

/// Stock a `percent` share of the chamber caves with gems. Each stocked
/// chamber receives a freshly shuffled, non-empty prefix of the nine
/// gem variants.
pub(crate) fn stock_treasure(caves: &mut [Cave], percent: u32, rng: &mut impl Rng) {
    let mut chambers = chamber_indices(caves);
    chambers.shuffle(rng);
    let stocked = percent as usize * chambers.len() / 100;

    let mut pool = Treasure::all_variants();
    for &index in chambers.iter().take(stocked) {
        pool.shuffle(rng);
        let mut take = rng.gen_range(0..pool.len());
        if take < 2 {
            take += 1;
        }
        for &gem in pool.iter().take(take) {
            caves[index].add_treasure(gem);
        }
    }
}

/// Station `count` monsters: one on the exit unconditionally, the rest on
/// randomly chosen chambers that are neither the entry nor the exit.
///
/// # Errors
///
/// Returns [`ConfigError::MonsterCapacity`] when the maze lacks enough
/// chamber caves to host the requested count.
pub(crate) fn station_monsters(
    caves: &mut [Cave],
    columns: usize,
    entry: Coordinate,
    exit: Coordinate,
    count: usize,
    rng: &mut impl Rng,
) -> Result<(), ConfigError> {
    let mut chambers = chamber_indices(caves);
    if chambers.len() < count + 1 {
        return Err(ConfigError::MonsterCapacity {
            requested: count,
            available: chambers.len().saturating_sub(1),
        });
    }

    caves[exit.index(columns)].set_monster(Monster::new());
    chambers.retain(|&index| index != entry.index(columns) && index != exit.index(columns));
    chambers.shuffle(rng);
    for &index in chambers.iter().take(count - 1) {
        caves[index].set_monster(Monster::new());
    }
    Ok(())
}
