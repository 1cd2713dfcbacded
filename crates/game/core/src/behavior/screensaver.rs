use crate::agent::{Body, SnakeId};
use crate::behavior::steering::is_blocked;
use crate::env::{RngOracle, SnakeEnv, roll};
use crate::geometry::Vec2;
use crate::tick::TickContext;

const DIAGONAL: f32 = std::f32::consts::FRAC_1_SQRT_2;

const CARDINAL_HEADINGS: [Vec2; 4] = [
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 0.0),
];

const COMPASS_HEADINGS: [Vec2; 8] = [
    Vec2::new(0.0, -1.0),
    Vec2::new(DIAGONAL, -DIAGONAL),
    Vec2::new(1.0, 0.0),
    Vec2::new(DIAGONAL, DIAGONAL),
    Vec2::new(0.0, 1.0),
    Vec2::new(-DIAGONAL, DIAGONAL),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-DIAGONAL, -DIAGONAL),
];

/// Headings a screensaver snake may take after a bounce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BounceDirections {
    /// Cardinals and diagonals.
    #[default]
    Eight,
    /// Cardinals only.
    Four,
}

impl BounceDirections {
    pub fn headings(self) -> &'static [Vec2] {
        match self {
            BounceDirections::Eight => &COMPASS_HEADINGS,
            BounceDirections::Four => &CARDINAL_HEADINGS,
        }
    }

    /// Random heading other than `current`.
    fn pick(self, rng: &dyn RngOracle, seed: u64, current: Vec2) -> Vec2 {
        let current = current.normalize_or_zero();
        let choices: Vec<Vec2> = self
            .headings()
            .iter()
            .copied()
            .filter(|heading| heading.dot(current) < 0.99)
            .collect();
        choices
            .get(rng.pick(seed, choices.len()))
            .copied()
            .unwrap_or(current)
    }
}

/// Billiard-ball mover with no awareness of the player.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreensaverState {
    pub directions: BounceDirections,
}

impl ScreensaverState {
    pub fn new(directions: BounceDirections) -> Self {
        Self { directions }
    }
}

pub(super) fn update(
    id: SnakeId,
    body: &mut Body,
    state: &mut ScreensaverState,
    ctx: &TickContext<'_>,
    env: &SnakeEnv<'_>,
) {
    let rng = match env.rng() {
        Ok(rng) => rng,
        Err(err) => {
            tracing::warn!(snake = %id, %err, "screensaver cannot bounce");
            return;
        }
    };
    let seed = ctx.seed_for(id, roll::BOUNCE_DIRECTION);

    if body.direction.is_zero() {
        body.direction = state.directions.pick(rng, seed, Vec2::ZERO);
    }

    let next = body.position + body.direction.normalize_or_zero() * (body.speed * ctx.dt);
    if is_blocked(body, next, ctx) {
        let heading = state.directions.pick(rng, seed, body.direction);
        tracing::trace!(snake = %id, from = %body.direction, to = %heading, "bounce");
        body.direction = heading;
        return;
    }
    body.position = next;
}
