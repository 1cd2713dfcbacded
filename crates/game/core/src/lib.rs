//! Deterministic snake AI shared by every host.
//!
//! `snake-core` holds the geometry, movement, and perception primitives, the
//! per-archetype state machines, and the light beam simulator. Everything here
//! is a pure function of its inputs: a host assembles a [`TickContext`] and a
//! [`SnakeEnv`] each frame and feeds every [`Snake`] through
//! [`update_snake`]. Side effects the host must perform (tile rotations,
//! projectiles) are surfaced as request flags on the returned state.
pub mod agent;
pub mod behavior;
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod light;
pub mod movement;
pub mod perception;
pub mod tick;
pub mod timer;

pub use agent::{
    Activation, Archetype, Behavior, BehaviorSpec, Body, Patrol, PatrolRoute, Senses, Snake,
    SnakeId, SnakeSpec, SpawnError, Wander,
};
pub use behavior::{
    BossState, BounceDirections, BursterState, Dash, GuardState, PhantomState, PhotophobicState,
    PlumberState, Pursuit, RainPattern, RainState, RattleMode, RattlesnakeState,
    ScreensaverState, SpitterState, StalkerState, is_off_screen, update_snake,
};
pub use config::AiConfig;
pub use env::{
    CardinalDirection, Env, GridDimensions, LightingOracle, Openings, OracleError, PcgRng,
    RngOracle, SnakeEnv, TileCoord, TileGridOracle, UniformLighting,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use geometry::{
    ArenaBounds, Circle, Rect, Size, Vec2, Wall, aabb_collision, collides_with_walls,
    direction_vector, distance, point_in_rect,
};
pub use light::{
    BeamResult, Crystal, LightPuzzle, LightSource, MAX_REFLECTIONS, Mirror, simulate_beam,
};
pub use movement::{find_path_around_walls, move_towards, slide_along_wall};
pub use perception::{has_line_of_sight, nearest_sound};
pub use tick::{PlayerSnapshot, TickContext};
pub use timer::{Countdown, CountdownStep};
