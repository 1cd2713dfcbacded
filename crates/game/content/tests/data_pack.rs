//! The level pack shipped in `data/` must always load.

use std::path::PathBuf;

use snake_content::{ContentFactory, LightingData};
use snake_core::Archetype;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn every_shipped_level_loads_and_spawns() {
    let factory = ContentFactory::new(data_dir());
    let names = factory.level_names().expect("list levels");
    assert_eq!(names, vec!["cellar", "mirrors", "pipes"]);

    for name in names {
        let level = factory.load_level(&name).expect("level loads");
        assert_eq!(level.name, name);
        for spec in &level.snakes {
            spec.spawn()
                .unwrap_or_else(|err| panic!("{name}: {err}"));
        }
    }
}

#[test]
fn shipped_levels_cover_every_archetype() {
    let factory = ContentFactory::new(data_dir());
    let mut seen = Vec::new();
    for name in factory.level_names().expect("list levels") {
        let level = factory.load_level(&name).expect("level loads");
        for spec in &level.snakes {
            let archetype = spec.spawn().expect("valid snake").archetype();
            if !seen.contains(&archetype) {
                seen.push(archetype);
            }
        }
    }
    for archetype in [
        Archetype::Stalker,
        Archetype::Guard,
        Archetype::Burster,
        Archetype::Screensaver,
        Archetype::Plumber,
        Archetype::Spitter,
        Archetype::Photophobic,
        Archetype::Rattlesnake,
        Archetype::Boss,
        Archetype::Phantom,
        Archetype::Rain,
    ] {
        assert!(seen.contains(&archetype), "no level uses {archetype}");
    }
}

#[test]
fn pipes_level_has_a_grid_and_a_dark_corner() {
    let level = ContentFactory::new(data_dir())
        .load_level("pipes")
        .expect("pipes loads");
    let grid = level.grid.expect("pipes has a grid");
    assert_eq!(grid.tiles.len(), grid.expected_tiles());
    assert_eq!(level.lighting, LightingData::Quadrants([true, true, true, false]));
}

#[test]
fn shipped_config_overrides_defaults() {
    let config = ContentFactory::new(data_dir())
        .load_config()
        .expect("ai.toml loads");
    assert_eq!(config.spit_interval, 1.5);
    assert_eq!(config.max_reflections, 10);
}
