use crate::agent::{Body, PatrolRoute, SnakeId};
use crate::behavior::steering::{chase, heard_sound, sighted_player, step_or_avoid};
use crate::geometry::{Vec2, distance};
use crate::tick::TickContext;
use crate::timer::{Countdown, CountdownStep};

/// Distance at which a returning rattlesnake counts as back in its pit.
const PIT_RADIUS: f32 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RattleMode {
    /// Coiled in the pit, motionless until disturbed.
    #[default]
    Dormant,
    Patrolling,
    Chasing,
    /// Heading back to the pit after a chase.
    Returning,
}

/// Pit dweller woken by sight or sound.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RattlesnakeState {
    pub mode: RattleMode,
    pub pit: Vec2,
    pub route: Option<PatrolRoute>,
    pub grace: Countdown,
    pub last_target: Option<Vec2>,
}

impl RattlesnakeState {
    /// Snakes with a route start out patrolling; the rest sleep in the pit.
    pub fn new(pit: Vec2, route: Option<PatrolRoute>) -> Self {
        let mode = if route.is_some() {
            RattleMode::Patrolling
        } else {
            RattleMode::Dormant
        };
        Self {
            mode,
            pit,
            route,
            grace: Countdown::IDLE,
            last_target: None,
        }
    }

    fn set_mode(&mut self, id: SnakeId, mode: RattleMode) {
        if self.mode != mode {
            tracing::debug!(snake = %id, from = %self.mode, to = %mode, "rattlesnake mode");
            self.mode = mode;
        }
    }
}

pub(super) fn update(
    id: SnakeId,
    body: &mut Body,
    state: &mut RattlesnakeState,
    ctx: &TickContext<'_>,
) {
    let stimulus = sighted_player(body, ctx)
        .map(|player| player.position)
        .or_else(|| heard_sound(body, ctx));

    if let Some(target) = stimulus {
        state.set_mode(id, RattleMode::Chasing);
        state.last_target = Some(target);
        state.grace.start(ctx.config.rattlesnake_grace);
        chase(body, target, body.pursuit_speed(ctx.config), ctx);
        return;
    }

    match state.mode {
        RattleMode::Dormant => {}
        RattleMode::Chasing => {
            if state.grace.tick(ctx.dt) == CountdownStep::Expired {
                state.last_target = None;
                let next = if state.route.is_some() {
                    RattleMode::Patrolling
                } else {
                    RattleMode::Returning
                };
                state.set_mode(id, next);
                return;
            }
            if let Some(target) = state.last_target {
                chase(body, target, body.pursuit_speed(ctx.config), ctx);
            }
        }
        RattleMode::Patrolling => match state.route.as_mut() {
            Some(route) => {
                let target = route.target_from(body.position, ctx.config.patrol_radius_tight);
                if !step_or_avoid(body, target, body.speed, ctx) {
                    route.advance();
                }
            }
            None => state.set_mode(id, RattleMode::Returning),
        },
        RattleMode::Returning => {
            chase(body, state.pit, body.speed, ctx);
            if distance(body.position, state.pit) <= PIT_RADIUS {
                state.set_mode(id, RattleMode::Dormant);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Senses;
    use crate::config::AiConfig;
    use crate::geometry::Size;

    #[test]
    fn sound_wakes_and_grace_sends_it_home() {
        let config = AiConfig::default();
        let pit = Vec2::new(50.0, 50.0);
        let mut body = Body::new(pit, Size::square(10.0), 20.0);
        body.senses = Senses::new(0.0, 200.0);
        let mut state = RattlesnakeState::new(pit, None);
        assert_eq!(state.mode, RattleMode::Dormant);

        let quiet = TickContext::new(0.5, &[], &config);
        update(SnakeId(1), &mut body, &mut state, &quiet);
        assert_eq!(body.position, pit);

        let sounds = [Vec2::new(150.0, 50.0)];
        let noisy = TickContext::new(0.5, &[], &config).with_sounds(&sounds);
        update(SnakeId(1), &mut body, &mut state, &noisy);
        assert_eq!(state.mode, RattleMode::Chasing);
        assert!(body.position.x > pit.x);

        // 2 s grace at 0.5 s per tick.
        for _ in 0..4 {
            update(SnakeId(1), &mut body, &mut state, &quiet);
        }
        assert_eq!(state.mode, RattleMode::Returning);

        for _ in 0..40 {
            update(SnakeId(1), &mut body, &mut state, &quiet);
        }
        assert_eq!(state.mode, RattleMode::Dormant);
        assert_eq!(body.position, pit);
    }
}
