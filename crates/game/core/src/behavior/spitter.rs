use crate::agent::{Body, PatrolRoute, SnakeId};
use crate::behavior::steering::{is_blocked, sighted_player, step_or_avoid};
use crate::env::CardinalDirection;
use crate::geometry::Vec2;
use crate::tick::TickContext;
use crate::timer::Countdown;

/// Ranged attacker. Firing is only requested here; projectiles belong to
/// the host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpitterState {
    /// Without a route the spitter bounces along cardinal axes.
    pub route: Option<PatrolRoute>,
    pub heading: CardinalDirection,
    pub cooldown: Countdown,
    /// Aim point of a projectile the host should fire this tick.
    pub spit_request: Option<Vec2>,
}

impl Default for SpitterState {
    fn default() -> Self {
        Self {
            route: None,
            heading: CardinalDirection::East,
            cooldown: Countdown::IDLE,
            spit_request: None,
        }
    }
}

impl SpitterState {
    pub fn new(route: Option<PatrolRoute>) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }
}

pub(super) fn update(id: SnakeId, body: &mut Body, state: &mut SpitterState, ctx: &TickContext<'_>) {
    state.spit_request = None;
    state.cooldown.tick(ctx.dt);
    if let Some(player) = sighted_player(body, ctx) {
        if !state.cooldown.is_running() {
            let aim = player.bounds().center();
            tracing::debug!(snake = %id, %aim, "spit requested");
            state.spit_request = Some(aim);
            state.cooldown.start(ctx.config.spit_interval);
        }
    }

    match state.route.as_mut() {
        Some(route) => {
            let target = route.target_from(body.position, ctx.config.patrol_radius_tight);
            if !step_or_avoid(body, target, body.speed, ctx) {
                route.advance();
            }
        }
        None => bounce(body, state, ctx),
    }
}

/// Straight run along the current heading; a blocked step turns clockwise,
/// so consecutive bounces alternate between the two axes.
fn bounce(body: &mut Body, state: &mut SpitterState, ctx: &TickContext<'_>) {
    let next = body.position + state.heading.unit() * (body.speed * ctx.dt);
    if is_blocked(body, next, ctx) {
        state.heading = state.heading.clockwise();
        body.direction = state.heading.unit();
        return;
    }
    body.relocate(next);
}
