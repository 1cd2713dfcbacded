//! Per-archetype state machines.
//!
//! [`update_snake`] is the only entry point: it gates on activation and a
//! usable tick delta, then hands the snake's body and payload to the handler
//! for its archetype. Handlers never fail. When a capability they need is
//! missing they leave the snake exactly as it was.
mod boss;
mod burster;
mod guard;
mod phantom;
mod photophobic;
mod plumber;
mod pursuit;
mod rain;
mod rattlesnake;
mod screensaver;
mod spitter;
mod stalker;
mod steering;

pub use boss::BossState;
pub use burster::{BursterState, Dash};
pub use guard::GuardState;
pub use phantom::PhantomState;
pub use photophobic::PhotophobicState;
pub use plumber::PlumberState;
pub use pursuit::Pursuit;
pub use rain::{RainPattern, RainState, is_off_screen};
pub use rattlesnake::{RattleMode, RattlesnakeState};
pub use screensaver::{BounceDirections, ScreensaverState};
pub use spitter::SpitterState;
pub use stalker::StalkerState;

use crate::agent::{Behavior, Snake};
use crate::env::SnakeEnv;
use crate::tick::TickContext;

/// Advances one snake by one tick.
///
/// Takes the snake by value and returns its successor; the input context is
/// never modified. Inactive snakes and ticks with a non-positive or
/// non-finite delta return the snake unchanged.
pub fn update_snake(snake: Snake, ctx: &TickContext<'_>, env: &SnakeEnv<'_>) -> Snake {
    if !ctx.has_valid_delta() {
        tracing::trace!(snake = %snake.id, dt = ctx.dt, "skipping tick with unusable delta");
        return snake;
    }
    if !snake.is_active(ctx.level, ctx.phase) {
        return snake;
    }

    let Snake {
        id,
        mut body,
        activation,
        mut behavior,
    } = snake;

    match &mut behavior {
        Behavior::Stalker(state) => stalker::update(id, &mut body, state, ctx, env),
        Behavior::Guard(state) => guard::update(id, &mut body, state, ctx, env),
        Behavior::Burster(state) => burster::update(id, &mut body, state, ctx, env),
        Behavior::Screensaver(state) => screensaver::update(id, &mut body, state, ctx, env),
        Behavior::Plumber(state) => plumber::update(id, &mut body, state, ctx, env),
        Behavior::Spitter(state) => spitter::update(id, &mut body, state, ctx),
        Behavior::Photophobic(state) => photophobic::update(id, &mut body, state, ctx, env),
        Behavior::Rattlesnake(state) => rattlesnake::update(id, &mut body, state, ctx),
        Behavior::Boss(state) => boss::update(&mut body, state, ctx),
        Behavior::Phantom(state) => phantom::update(id, &mut body, state, ctx),
        Behavior::Rain(state) => rain::update(&mut body, state, ctx),
    }

    Snake {
        id,
        body,
        activation,
        behavior,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Activation, Body, Patrol, SnakeId};
    use crate::config::AiConfig;
    use crate::geometry::{Size, Vec2};

    fn wanderer() -> Snake {
        Snake::new(
            SnakeId(1),
            Body::new(Vec2::new(50.0, 50.0), Size::square(10.0), 40.0),
            Behavior::Guard(GuardState::new(Patrol::from_points(vec![Vec2::new(
                200.0, 50.0,
            )]))),
        )
    }

    #[test]
    fn inactive_snakes_are_untouched() {
        let config = AiConfig::default();
        let ctx = TickContext::new(0.1, &[], &config).with_phase("daylight");
        let snake = wanderer().with_activation(Activation::DuringPhase("blackout".into()));
        let next = update_snake(snake.clone(), &ctx, &SnakeEnv::empty());
        assert_eq!(next, snake);
    }

    #[test]
    fn unusable_delta_is_a_no_op() {
        let config = AiConfig::default();
        let snake = wanderer();
        for dt in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let ctx = TickContext::new(dt, &[], &config);
            assert_eq!(update_snake(snake.clone(), &ctx, &SnakeEnv::empty()), snake);
        }
    }

    #[test]
    fn active_snakes_move() {
        let config = AiConfig::default();
        let ctx = TickContext::new(0.1, &[], &config);
        let next = update_snake(wanderer(), &ctx, &SnakeEnv::empty());
        assert_eq!(next.position(), Vec2::new(54.0, 50.0));
    }
}
