use std::path::PathBuf;

use snake_content::ContentFactory;
use snake_core::{PlayerSnapshot, Size, Vec2};
use snake_runtime::{FrameInput, LevelSimulation, SimConfig, SimEvent};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"))
}

fn load(name: &str) -> LevelSimulation {
    let factory = factory();
    let ai = factory.load_config().expect("ai.toml");
    let level = factory.load_level(name).expect("level");
    LevelSimulation::new(level, SimConfig::default().with_seed(3).with_ai(ai)).expect("spawn")
}

#[test]
fn shipped_levels_keep_snakes_out_of_walls() {
    let player = PlayerSnapshot::new(Vec2::new(400.0, 300.0), Size::square(20.0));
    let input = FrameInput::new(1.0 / 60.0)
        .with_player(player)
        .with_sounds(vec![Vec2::new(420.0, 310.0)]);

    for name in ["cellar", "pipes"] {
        let mut sim = load(name);
        let walls = factory().load_level(name).expect("level").walls;
        for _ in 0..600 {
            sim.step(&input);
            for snake in sim.snakes() {
                let bounds = snake.bounds();
                assert!(
                    walls.iter().all(|wall| !wall.intersects(&bounds)),
                    "{name}: snake {} inside a wall at {}",
                    snake.id,
                    snake.position()
                );
            }
        }
    }
}

#[test]
fn mirrors_puzzle_is_solved_by_turning_the_upper_mirror() {
    let mut sim = load("mirrors");
    let input = FrameInput::new(1.0 / 60.0);

    assert!(sim.step(&input).is_empty());
    assert!(sim.beam().is_some_and(|beam| !beam.hits_crystal && beam.reflections == 2));

    sim.rotate_mirror(1, 90.0).expect("upper mirror");
    let events = sim.step(&input);
    assert_eq!(events, vec![SimEvent::CrystalActivated { tick: 1 }]);
}

#[test]
fn finale_rain_falls_out_of_the_arena() {
    let mut sim = load("mirrors");
    let calm = FrameInput::new(0.1);
    for _ in 0..10 {
        sim.step(&calm);
    }
    assert_eq!(sim.snakes().len(), 3);

    let finale = FrameInput::new(0.1).with_phase("finale");
    let mut despawned = 0;
    for _ in 0..60 {
        despawned += sim
            .step(&finale)
            .iter()
            .filter(|event| matches!(event, SimEvent::RainDespawned { .. }))
            .count();
    }
    assert_eq!(despawned, 2);
    assert_eq!(sim.snakes().len(), 1);
}
