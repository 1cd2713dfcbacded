use std::f32::consts::TAU;

use crate::agent::Body;
use crate::geometry::{ArenaBounds, Vec2};
use crate::tick::TickContext;

/// Trajectory of a falling rain snake.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RainPattern {
    #[default]
    Straight,
    /// Falls at `angle_deg` from vertical; positive leans right.
    Angled { angle_deg: f32 },
    /// Falls straight while swaying around its starting column.
    Sine { amplitude: f32, frequency: f32 },
}

/// One-way descent with no collision response.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainState {
    pub pattern: RainPattern,
    /// Column the sine pattern oscillates around.
    pub origin_x: f32,
    pub elapsed: f32,
}

impl RainState {
    pub fn new(pattern: RainPattern, origin_x: f32) -> Self {
        Self {
            pattern,
            origin_x,
            elapsed: 0.0,
        }
    }
}

/// True once a rain body has fallen past the bottom or drifted fully off
/// either side of the arena. Rain spawning above the top edge is still live.
pub fn is_off_screen(body: &Body, bounds: ArenaBounds) -> bool {
    body.position.y > bounds.height
        || body.position.x + body.size.width < 0.0
        || body.position.x > bounds.width
}

pub(super) fn update(body: &mut Body, state: &mut RainState, ctx: &TickContext<'_>) {
    state.elapsed += ctx.dt;
    let fall = body.speed * ctx.dt;
    let next = match state.pattern {
        RainPattern::Straight => body.position + Vec2::new(0.0, fall),
        RainPattern::Angled { angle_deg } => {
            let angle = angle_deg.to_radians();
            body.position + Vec2::new(angle.sin(), angle.cos()) * fall
        }
        RainPattern::Sine {
            amplitude,
            frequency,
        } => Vec2::new(
            state.origin_x + amplitude * (TAU * frequency * state.elapsed).sin(),
            body.position.y + fall,
        ),
    };
    body.relocate(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;
    use crate::geometry::{Rect, Size};

    fn drop_at(x: f32) -> Body {
        Body::new(Vec2::new(x, -10.0), Size::square(8.0), 100.0)
    }

    #[test]
    fn straight_rain_ignores_walls() {
        let config = AiConfig::default();
        let walls = [Rect::new(0.0, 0.0, 800.0, 50.0)];
        let ctx = TickContext::new(0.1, &walls, &config);
        let mut body = drop_at(40.0);
        let mut state = RainState::new(RainPattern::Straight, 40.0);
        update(&mut body, &mut state, &ctx);
        update(&mut body, &mut state, &ctx);
        assert_eq!(body.position, Vec2::new(40.0, 10.0));
    }

    #[test]
    fn angled_rain_drifts_sideways() {
        let config = AiConfig::default();
        let ctx = TickContext::new(0.1, &[], &config);
        let mut body = drop_at(40.0);
        let mut state = RainState::new(RainPattern::Angled { angle_deg: 30.0 }, 40.0);
        update(&mut body, &mut state, &ctx);
        assert!((body.position.x - 45.0).abs() < 1e-3);
        assert!(body.position.y > -10.0);
    }

    #[test]
    fn sine_rain_sways_around_its_column() {
        let config = AiConfig::default();
        let ctx = TickContext::new(0.25, &[], &config);
        let mut body = drop_at(40.0);
        let mut state = RainState::new(
            RainPattern::Sine {
                amplitude: 20.0,
                frequency: 1.0,
            },
            40.0,
        );
        update(&mut body, &mut state, &ctx);
        assert!((body.position.x - 60.0).abs() < 1e-3);
        update(&mut body, &mut state, &ctx);
        update(&mut body, &mut state, &ctx);
        assert!((body.position.x - 20.0).abs() < 1e-3);
    }

    #[test]
    fn off_screen_only_below_or_beside() {
        let bounds = ArenaBounds::new(100.0, 100.0);
        assert!(!is_off_screen(&drop_at(40.0), bounds));
        let mut body = drop_at(40.0);
        body.position.y = 101.0;
        assert!(is_off_screen(&body, bounds));
        body.position = Vec2::new(-9.0, 50.0);
        assert!(is_off_screen(&body, bounds));
    }
}
