use crate::agent::{Body, Patrol, SnakeId};
use crate::behavior::pursuit::Pursuit;
use crate::behavior::steering::{advance_patrol, chase, sighted_player};
use crate::env::SnakeEnv;
use crate::tick::TickContext;

/// Sighted patroller that chases at elevated speed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardState {
    pub patrol: Patrol,
    pub pursuit: Pursuit,
}

impl GuardState {
    pub fn new(patrol: Patrol) -> Self {
        Self {
            patrol,
            pursuit: Pursuit::default(),
        }
    }
}

pub(super) fn update(
    id: SnakeId,
    body: &mut Body,
    state: &mut GuardState,
    ctx: &TickContext<'_>,
    env: &SnakeEnv<'_>,
) {
    let seen = sighted_player(body, ctx).map(|player| player.position);
    match state.pursuit.update(id, body.position, seen, ctx) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Senses;
    use crate::config::AiConfig;
    use crate::geometry::{Rect, Size, Vec2, collides_with_walls};
    use crate::tick::PlayerSnapshot;

    fn guard_body() -> Body {
        let mut body = Body::new(Vec2::new(0.0, 0.0), Size::square(10.0), 20.0);
        body.senses = Senses::new(150.0, 0.0);
        body
    }

    #[test]
    fn chases_at_pursuit_speed() {
        let config = AiConfig::default();
        let player = PlayerSnapshot::new(Vec2::new(100.0, 0.0), Size::square(10.0));
        let ctx = TickContext::new(0.1, &[], &config).with_player(&player);
        let mut body = guard_body();
        let mut state = GuardState::default();

        update(SnakeId(1), &mut body, &mut state, &ctx, &SnakeEnv::empty());
        assert!(state.pursuit.is_chasing);
        assert!((body.position.x - 3.0).abs() < 1e-4);
    }

    #[test]
    fn blocked_patrol_skips_the_waypoint() {
        let config = AiConfig::default();
        // Boxed in on every side the patrol could try.
        let walls = [
            Rect::new(10.0, -20.0, 5.0, 50.0),
            Rect::new(-20.0, 10.0, 50.0, 5.0),
            Rect::new(-5.0, -20.0, 5.0, 50.0),
            Rect::new(-20.0, -5.0, 50.0, 5.0),
        ];
        let ctx = TickContext::new(0.1, &walls, &config);
        let mut body = guard_body();
        body.senses = Senses::NONE;
        let route = vec![Vec2::new(200.0, 0.0), Vec2::new(0.0, 200.0)];
        let mut state = GuardState::new(Patrol::from_points(route));

        update(SnakeId(1), &mut body, &mut state, &ctx, &SnakeEnv::empty());
        assert_eq!(body.position, Vec2::ZERO);
        assert!(!collides_with_walls(body.position, body.size, &walls));
        assert_eq!(state.patrol.route().map(|r| r.index()), Some(1));
    }
}
