//! Structural invariants checked across a sweep of seeds: connectivity,
//! passage counts, entry/exit placement, and wrapping behavior.

use duskmaw_engine::{
    BuildError, ConfigError, Coordinate, Dungeon, DungeonConfig, GenerationError,
};

fn coordinates(rows: usize, columns: usize) -> impl Iterator<Item = Coordinate> {
    (0..rows).flat_map(move |row| (0..columns).map(move |column| Coordinate::new(row, column)))
}

fn passage_count(dungeon: &Dungeon) -> usize {
    let (rows, columns) = dungeon.dimensions();
    let ends: usize = coordinates(rows, columns)
        .map(|at| dungeon.neighbors(at).len())
        .sum();
    // Every passage is recorded from both ends.
    ends / 2
}

#[test]
fn every_cave_is_reachable_from_the_entry() {
    for seed in 0..20 {
        let dungeon = Dungeon::from_seed(DungeonConfig::new(6, 7), seed).unwrap();
        for at in coordinates(6, 7) {
            assert!(
                dungeon.shortest_distance(dungeon.entry(), at).is_some(),
                "seed {seed}: cave {at} unreachable"
            );
        }
    }
}

#[test]
fn spanning_structure_has_exactly_the_requested_extra_passages() {
    for seed in 0..20 {
        for interconnectivity in [0, 1, 4] {
            let mut config = DungeonConfig::new(6, 6);
            config.interconnectivity = interconnectivity;
            let dungeon = Dungeon::from_seed(config, seed).unwrap();
            assert_eq!(passage_count(&dungeon), 35 + interconnectivity);
        }
    }
}

#[test]
fn passages_are_symmetric() {
    let dungeon = Dungeon::from_seed(DungeonConfig::new(5, 8), 3).unwrap();
    for at in coordinates(5, 8) {
        for other in dungeon.neighbors(at) {
            assert!(
                dungeon.neighbors(other).contains(&at),
                "passage {at} -> {other} has no reverse"
            );
        }
    }
}

#[test]
fn entry_and_exit_are_distant_chambers() {
    for seed in 0..20 {
        let dungeon = Dungeon::from_seed(DungeonConfig::new(7, 7), seed).unwrap();
        let (entry, exit) = (dungeon.entry(), dungeon.exit());
        assert_ne!(entry, exit);
        assert!(!dungeon.is_junction(entry), "seed {seed}: entry is a junction");
        assert!(!dungeon.is_junction(exit), "seed {seed}: exit is a junction");
        let distance = dungeon.shortest_distance(entry, exit).unwrap();
        assert!(distance >= 5, "seed {seed}: entry/exit only {distance} apart");
    }
}

#[test]
fn bounded_dungeons_never_cross_the_border() {
    for seed in 0..10 {
        let dungeon = Dungeon::from_seed(DungeonConfig::new(5, 5), seed).unwrap();
        for at in coordinates(5, 5) {
            for other in dungeon.neighbors(at) {
                let row_gap = at.row.abs_diff(other.row);
                let column_gap = at.column.abs_diff(other.column);
                assert!(
                    row_gap + column_gap == 1,
                    "seed {seed}: non-adjacent passage {at} -> {other}"
                );
            }
        }
    }
}

#[test]
fn wrapping_dungeons_may_cross_the_border() {
    // A single seed need not draw a border edge, but across a sweep at
    // high interconnectivity at least one must appear.
    let mut saw_border_passage = false;
    for seed in 0..20 {
        let mut config = DungeonConfig::new(5, 5);
        config.wrapping = true;
        config.interconnectivity = 8;
        let dungeon = Dungeon::from_seed(config, seed).unwrap();
        for at in coordinates(5, 5) {
            for other in dungeon.neighbors(at) {
                let row_gap = at.row.abs_diff(other.row);
                let column_gap = at.column.abs_diff(other.column);
                if row_gap + column_gap != 1 {
                    assert!(
                        (row_gap == 4 && column_gap == 0) || (row_gap == 0 && column_gap == 4),
                        "seed {seed}: passage {at} -> {other} is neither inner nor border"
                    );
                    saw_border_passage = true;
                }
            }
        }
    }
    assert!(saw_border_passage);
}

#[test]
fn junctions_hold_no_treasure() {
    for seed in 0..10 {
        let mut config = DungeonConfig::new(6, 6);
        config.treasure_percent = 100;
        let dungeon = Dungeon::from_seed(config, seed).unwrap();
        for at in coordinates(6, 6) {
            if dungeon.is_junction(at) {
                assert!(dungeon.treasure_at(at).is_empty());
            }
        }
    }
}

#[test]
fn invalid_configurations_are_rejected() {
    assert_eq!(
        Dungeon::from_seed(DungeonConfig::new(0, 5), 1).unwrap_err(),
        BuildError::Config(ConfigError::Dimensions { rows: 0, columns: 5 })
    );

    let mut config = DungeonConfig::new(5, 5);
    config.treasure_percent = 0;
    assert_eq!(
        Dungeon::from_seed(config, 1).unwrap_err(),
        BuildError::Config(ConfigError::TreasurePercent(0))
    );

    let mut config = DungeonConfig::new(5, 5);
    config.treasure_percent = 101;
    assert_eq!(
        Dungeon::from_seed(config, 1).unwrap_err(),
        BuildError::Config(ConfigError::TreasurePercent(101))
    );

    let mut config = DungeonConfig::new(5, 5);
    config.monster_count = 0;
    assert_eq!(
        Dungeon::from_seed(config, 1).unwrap_err(),
        BuildError::Config(ConfigError::NoMonsters)
    );

    // A bounded 2x2 grid has four candidate edges; three carve the
    // spanning structure, leaving one for extra passages.
    let mut config = DungeonConfig::new(2, 2);
    config.interconnectivity = 2;
    assert_eq!(
        Dungeon::from_seed(config, 1).unwrap_err(),
        BuildError::Config(ConfigError::Interconnectivity {
            requested: 2,
            available: 1,
        })
    );
}

#[test]
fn tight_mazes_without_a_distant_pair_fail_generation() {
    // A 2x2 grid tops out at three steps between caves.
    let result = Dungeon::from_seed(DungeonConfig::new(2, 2), 5);
    assert_eq!(
        result.unwrap_err(),
        BuildError::Generation(GenerationError::NoQualifyingPair { min_distance: 5 })
    );
}

#[test]
fn monster_overflow_is_rejected() {
    // Small grids hold few chambers; asking for far more monsters than
    // caves must fail regardless of layout.
    let mut config = DungeonConfig::new(4, 4);
    config.monster_count = 30;
    let error = Dungeon::from_seed(config, 2).unwrap_err();
    assert!(matches!(
        error,
        BuildError::Config(ConfigError::MonsterCapacity { requested: 30, .. })
    ));
}
