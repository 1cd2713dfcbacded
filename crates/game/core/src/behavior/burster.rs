use crate::agent::{Body, Patrol, SnakeId};
use crate::behavior::pursuit::Pursuit;
use crate::behavior::steering::{advance_patrol, chase, sighted_player};
use crate::env::SnakeEnv;
use crate::geometry::{Vec2, collides_with_walls};
use crate::movement::move_towards;
use crate::tick::TickContext;
use crate::timer::{Countdown, CountdownStep};

/// A committed, time-boxed lunge toward a fixed point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dash {
    pub target: Vec2,
    pub timer: Countdown,
}

/// Ambush attacker: dashes on first sight, otherwise behaves like a guard.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BursterState {
    pub patrol: Patrol,
    pub pursuit: Pursuit,
    pub dash: Option<Dash>,
    /// Falls back to base speed times the configured dash multiplier.
    pub dash_speed: Option<f32>,
    /// Falls back to the configured dash duration.
    pub dash_duration: Option<f32>,
    /// Whether the player was visible on the previous tick.
    pub saw_player: bool,
}

impl BursterState {
    pub fn new(patrol: Patrol) -> Self {
        Self {
            patrol,
            ..Self::default()
        }
    }

    pub fn with_dash(mut self, speed: Option<f32>, duration: Option<f32>) -> Self {
        self.dash_speed = speed;
        self.dash_duration = duration;
        self
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_some()
    }
}

pub(super) fn update(
    id: SnakeId,
    body: &mut Body,
    state: &mut BursterState,
    ctx: &TickContext<'_>,
    env: &SnakeEnv<'_>,
) {
    if state.is_dashing() {
        dash_step(id, body, state, ctx);
        return;
    }

    let seen = sighted_player(body, ctx);
    let first_sight = seen.is_some() && !state.saw_player;
    state.saw_player = seen.is_some();
    let target = state
        .pursuit
        .update(id, body.position, seen.map(|player| player.position), ctx);

    if let (true, Some(player)) = (first_sight, seen) {
        let target = player.predicted_position(ctx.config.dash_lead_time);
        let duration = state.dash_duration.unwrap_or(ctx.config.dash_duration);
        tracing::debug!(snake = %id, %target, duration, "burster dash");
        state.dash = Some(Dash {
            target,
            timer: Countdown::running(duration),
        });
        dash_step(id, body, state, ctx);
        return;
    }

    match target {
        Some(target) => chase(body, target, body.pursuit_speed(ctx.config), ctx),
        None => advance_patrol(
            id,
            body,
            &mut state.patrol,
            ctx.config.patrol_radius_tight,
            ctx,
            env,
        ),
    }
}

/// Dashes never slide: hitting a wall ends the dash where the snake stands.
fn dash_step(id: SnakeId, body: &mut Body, state: &mut BursterState, ctx: &TickContext<'_>) {
    let speed = state
        .dash_speed
        .unwrap_or(body.speed * ctx.config.dash_speed_multiplier);
    let Some(dash) = state.dash.as_mut() else {
        return;
    };

    let next = move_towards(body.position, dash.target, speed * ctx.dt);
    if collides_with_walls(next, body.size, ctx.walls) {
        tracing::debug!(snake = %id, "dash aborted on wall impact");
        state.dash = None;
        return;
    }
    body.relocate(next);

    if dash.timer.tick(ctx.dt) != CountdownStep::Running {
        tracing::debug!(snake = %id, "dash finished");
        state.dash = None;
    }
}
