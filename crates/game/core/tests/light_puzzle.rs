use snake_core::{
    AiConfig, ArenaBounds, Crystal, LightPuzzle, LightSource, MAX_REFLECTIONS, Mirror, Rect, Vec2,
};

const ARENA: ArenaBounds = ArenaBounds::new(800.0, 600.0);

#[test]
fn facing_mirrors_are_capped() {
    // Beam enters between two parallel mirrors at a shallow angle and would
    // otherwise bounce forever.
    let mut puzzle = LightPuzzle {
        source: LightSource::new(Vec2::new(400.0, 300.0), 0.0),
        mirrors: vec![
            Mirror::new(Vec2::new(400.0, 100.0), 400.0, 0.0),
            Mirror::new(Vec2::new(400.0, 500.0), 400.0, 0.0),
        ],
        crystal: None,
    };

    let result = puzzle.simulate(&[], ARENA, 50);
    assert_eq!(result.reflections, MAX_REFLECTIONS);
    assert_eq!(result.path.len(), MAX_REFLECTIONS as usize + 2);
    assert!(puzzle.mirrors.iter().all(|mirror| mirror.is_reflecting));

    let config = AiConfig::default().with_max_reflections(3);
    let result = puzzle.simulate(&[], ARENA, config.max_reflections);
    assert_eq!(result.reflections, 3);
    assert_eq!(result.path.len(), 5);
}

#[test]
fn rotating_a_mirror_toggles_the_crystal() {
    let mut puzzle = LightPuzzle {
        source: LightSource::new(Vec2::new(100.0, 300.0), 90.0),
        mirrors: vec![Mirror::new(Vec2::new(300.0, 300.0), 40.0, 315.0)],
        crystal: Some(Crystal::new(Rect::new(290.0, 100.0, 20.0, 20.0))),
    };

    let lit = puzzle.simulate(&[], ARENA, 10);
    assert!(lit.hits_crystal);
    assert!(puzzle.crystal.is_some_and(|crystal| crystal.is_active));

    assert!(puzzle.rotate_mirror(0, 90.0));
    let dark = puzzle.simulate(&[], ARENA, 10);
    assert!(!dark.hits_crystal);
    assert!(puzzle.crystal.is_some_and(|crystal| !crystal.is_active));
    assert!(puzzle.mirrors[0].is_reflecting);

    assert!(!puzzle.rotate_mirror(3, 45.0));
}
