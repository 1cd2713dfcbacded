use crate::agent::{Body, Patrol, SnakeId};
use crate::behavior::steering::{advance_patrol, chase, heard_sound};
use crate::env::SnakeEnv;
use crate::geometry::{Vec2, distance};
use crate::tick::TickContext;
use crate::timer::{Countdown, CountdownStep};

/// Blind hunter that follows sounds.
///
/// The last heard position is latched so the stalker keeps going after the
/// sound stops. Once it gets close it searches for a while, then gives up.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StalkerState {
    pub patrol: Patrol,
    pub is_chasing: bool,
    pub last_heard: Option<Vec2>,
    pub search: Countdown,
}

impl StalkerState {
    pub fn new(patrol: Patrol) -> Self {
        Self {
            patrol,
            ..Self::default()
        }
    }

    fn give_up(&mut self) {
        self.is_chasing = false;
        self.last_heard = None;
        self.search.stop();
    }
}

pub(super) fn update(
    id: SnakeId,
    body: &mut Body,
    state: &mut StalkerState,
    ctx: &TickContext<'_>,
    env: &SnakeEnv<'_>,
) {
    if let Some(sound) = heard_sound(body, ctx) {
        if !state.is_chasing {
            tracing::debug!(snake = %id, %sound, "stalker heard a sound");
        }
        state.is_chasing = true;
        state.last_heard = Some(sound);
        state.search.stop();
        chase(body, sound, body.speed, ctx);
        return;
    }

    if state.is_chasing {
        let Some(target) = state.last_heard else {
            state.give_up();
            return;
        };
        if state.search.is_running() {
            if state.search.tick(ctx.dt) == CountdownStep::Expired {
                tracing::debug!(snake = %id, "stalker gave up searching");
                state.give_up();
                return;
            }
            chase(body, target, body.speed, ctx);
        } else {
            chase(body, target, body.speed, ctx);
            if distance(body.position, target) <= ctx.config.search_radius {
                state.search.start(ctx.config.search_duration);
            }
        }
        return;
    }

    advance_patrol(
        id,
        body,
        &mut state.patrol,
        ctx.config.patrol_radius_loose,
        ctx,
        env,
    );
}
