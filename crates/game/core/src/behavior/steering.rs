//! Movement and sensing helpers shared by the handlers.

use crate::agent::{Body, Patrol, SnakeId};
use crate::env::SnakeEnv;
use crate::geometry::{Vec2, collides_with_walls};
use crate::movement::{find_path_around_walls, move_towards, slide_along_wall};
use crate::perception::{has_line_of_sight, nearest_sound};
use crate::tick::{PlayerSnapshot, TickContext};

/// The player, if this body can currently see them.
pub(crate) fn sighted_player<'a>(
    body: &Body,
    ctx: &TickContext<'a>,
) -> Option<&'a PlayerSnapshot> {
    let player = ctx.player?;
    if !body.senses.can_see() {
        return None;
    }
    has_line_of_sight(
        body.position,
        player.position,
        ctx.walls,
        body.senses.sight_range,
    )
    .then_some(player)
}

pub(crate) fn heard_sound(body: &Body, ctx: &TickContext<'_>) -> Option<Vec2> {
    nearest_sound(body.position, ctx.sounds, body.senses.hearing_range)
}

/// Straight move toward `target`, sliding along walls when blocked.
pub(crate) fn chase(body: &mut Body, target: Vec2, speed: f32, ctx: &TickContext<'_>) {
    let intended = move_towards(body.position, target, speed * ctx.dt);
    let next = slide_along_wall(body.position, intended, ctx.walls, body.size);
    body.relocate(next);
}

/// Straight move toward `target`, falling back to local avoidance.
///
/// Returns `false` when every avoidance candidate is blocked and the body
/// did not move.
pub(crate) fn step_or_avoid(
    body: &mut Body,
    target: Vec2,
    speed: f32,
    ctx: &TickContext<'_>,
) -> bool {
    let reach = speed * ctx.dt;
    let direct = move_towards(body.position, target, reach);
    if !collides_with_walls(direct, body.size, ctx.walls) {
        body.relocate(direct);
        return true;
    }
    avoid(body, target, reach, ctx)
}

/// Full fallback chain: straight move, then slide, then local avoidance.
pub(crate) fn pursue(body: &mut Body, target: Vec2, speed: f32, ctx: &TickContext<'_>) -> bool {
    let reach = speed * ctx.dt;
    let intended = move_towards(body.position, target, reach);
    if !collides_with_walls(intended, body.size, ctx.walls) {
        body.relocate(intended);
        return true;
    }
    let slid = slide_along_wall(body.position, intended, ctx.walls, body.size);
    if slid != body.position {
        body.relocate(slid);
        return true;
    }
    avoid(body, target, reach, ctx)
}

fn avoid(body: &mut Body, target: Vec2, reach: f32, ctx: &TickContext<'_>) -> bool {
    let waypoint = find_path_around_walls(
        body.position,
        target,
        ctx.walls,
        body.size,
        ctx.config.avoidance_step,
    );
    if waypoint == body.position {
        return false;
    }
    let next = move_towards(body.position, waypoint, reach);
    if collides_with_walls(next, body.size, ctx.walls) {
        return false;
    }
    tracing::trace!(from = %body.position, to = %next, "avoiding obstacle");
    body.relocate(next);
    true
}

/// Walks the patrol at base speed; a fully blocked step skips the target.
pub(crate) fn advance_patrol(
    id: SnakeId,
    body: &mut Body,
    patrol: &mut Patrol,
    radius: f32,
    ctx: &TickContext<'_>,
    env: &SnakeEnv<'_>,
) {
    let Some(target) = patrol.next_target(id, body.position, body.size, radius, ctx, env) else {
        return;
    };
    if !step_or_avoid(body, target, body.speed, ctx) {
        tracing::debug!(snake = %id, %target, "patrol blocked, skipping target");
        patrol.skip();
    }
}

/// True when a box at `next` would hit a wall or leave the arena.
pub(crate) fn is_blocked(body: &Body, next: Vec2, ctx: &TickContext<'_>) -> bool {
    collides_with_walls(next, body.size, ctx.walls) || !ctx.bounds.contains_box(next, body.size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Senses;
    use crate::config::AiConfig;
    use crate::geometry::{Rect, Size};

    fn body() -> Body {
        let mut body = Body::new(Vec2::new(0.0, 0.0), Size::square(10.0), 50.0);
        body.senses = Senses::new(150.0, 0.0);
        body
    }

    #[test]
    fn walls_hide_the_player() {
        let config = AiConfig::default();
        let player = PlayerSnapshot::new(Vec2::new(100.0, 0.0), Size::square(10.0));
        let walls = [Rect::new(50.0, -20.0, 5.0, 40.0)];

        let open = TickContext::new(0.1, &[], &config).with_player(&player);
        assert!(sighted_player(&body(), &open).is_some());

        let blocked = TickContext::new(0.1, &walls, &config).with_player(&player);
        assert!(sighted_player(&body(), &blocked).is_none());
    }

    #[test]
    fn blind_bodies_never_see() {
        let config = AiConfig::default();
        let player = PlayerSnapshot::new(Vec2::new(10.0, 0.0), Size::square(10.0));
        let ctx = TickContext::new(0.1, &[], &config).with_player(&player);
        let mut blind = body();
        blind.senses = Senses::NONE;
        assert!(sighted_player(&blind, &ctx).is_none());
    }

    #[test]
    fn pursue_slides_before_avoiding() {
        let config = AiConfig::default();
        let walls = [Rect::new(20.0, -100.0, 10.0, 300.0)];
        let ctx = TickContext::new(0.1, &walls, &config);
        let mut b = body();
        b.position = Vec2::new(10.0, 0.0);
        assert!(pursue(&mut b, Vec2::new(100.0, 40.0), 50.0, &ctx));
        assert_eq!(b.position.x, 10.0);
        assert!(b.position.y > 0.0);
    }

    #[test]
    fn out_of_arena_counts_as_blocked() {
        let config = AiConfig::default();
        let ctx = TickContext::new(0.1, &[], &config);
        let b = body();
        assert!(is_blocked(&b, Vec2::new(-1.0, 0.0), &ctx));
        assert!(!is_blocked(&b, Vec2::new(1.0, 0.0), &ctx));
    }
}
