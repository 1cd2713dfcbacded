//! Light-sensitive snake.
//!
//! In the dark it hunts by sound, hesitating briefly when a sound stops and
//! resting after reaching where it last heard one. In the light it charges
//! in a straight line at the player's last seen position and rests after
//! slamming into a wall or reaching that position, then picks a new charge
//! line.

use crate::agent::{Body, SnakeId};
use crate::behavior::steering::{chase, heard_sound, is_blocked, sighted_player};
use crate::env::SnakeEnv;
use crate::geometry::{Vec2, direction_vector, distance};
use crate::tick::TickContext;
use crate::timer::{Countdown, CountdownStep};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhotophobicState {
    pub in_light: bool,
    pub pause: Countdown,
    pub last_heard: Option<Vec2>,
    pub heard_last_tick: bool,
    pub last_seen: Option<Vec2>,
    /// Committed heading of the current charge.
    pub charge: Option<Vec2>,
}

pub(super) fn update(
    id: SnakeId,
    body: &mut Body,
    state: &mut PhotophobicState,
    ctx: &TickContext<'_>,
    env: &SnakeEnv<'_>,
) {
    let lighting = match env.lighting() {
        Ok(lighting) => lighting,
        Err(err) => {
            tracing::warn!(snake = %id, %err, "photophobic snake idle");
            return;
        }
    };

    let lit = lighting.is_lit(body.center());
    if lit != state.in_light {
        tracing::debug!(snake = %id, lit, "photophobic mode switch");
        state.in_light = lit;
        state.charge = None;
        state.heard_last_tick = false;
    }

    if state.pause.tick(ctx.dt) == CountdownStep::Running {
        return;
    }

    if lit {
        charge(id, body, state, ctx);
    } else {
        hunt(body, state, ctx);
    }
}

fn charge(id: SnakeId, body: &mut Body, state: &mut PhotophobicState, ctx: &TickContext<'_>) {
    if let Some(player) = sighted_player(body, ctx) {
        state.last_seen = Some(player.position);
    }

    let heading = match state.charge {
        Some(heading) => heading,
        None => {
            let Some(target) = state.last_seen else {
                return;
            };
            let heading = direction_vector(body.position, target);
            if heading.is_zero() {
                return;
            }
            state.charge = Some(heading);
            heading
        }
    };

    let next = body.position + heading * (body.pursuit_speed(ctx.config) * ctx.dt);
    if is_blocked(body, next, ctx) {
        tracing::debug!(snake = %id, "charge hit a wall");
        state.charge = None;
        state.pause.start(ctx.config.recovery_pause);
        return;
    }
    body.relocate(next);

    if state
        .last_seen
        .is_some_and(|target| distance(body.position, target) <= ctx.config.give_up_radius)
    {
        tracing::debug!(snake = %id, "charge reached last seen position");
        state.charge = None;
        state.last_seen = None;
        state.pause.start(ctx.config.recovery_pause);
    }
}

fn hunt(body: &mut Body, state: &mut PhotophobicState, ctx: &TickContext<'_>) {
    if let Some(sound) = heard_sound(body, ctx) {
        state.last_heard = Some(sound);
        state.heard_last_tick = true;
        chase(body, sound, body.speed, ctx);
        return;
    }

    if state.heard_last_tick {
        state.heard_last_tick = false;
        state.pause.start(ctx.config.hesitation_pause);
        return;
    }

    let Some(target) = state.last_heard else {
        return;
    };
    chase(body, target, body.speed, ctx);
    if distance(body.position, target) <= ctx.config.give_up_radius {
        state.last_heard = None;
        state.pause.start(ctx.config.recovery_pause);
    }
}
