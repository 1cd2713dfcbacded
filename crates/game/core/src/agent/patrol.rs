//! Patrol routes and wandering.

use crate::agent::SnakeId;
use crate::env::{SnakeEnv, roll};
use crate::geometry::{Size, Vec2, distance};
use crate::tick::TickContext;

/// Ordered waypoints walked back and forth.
///
/// The index reflects at either end instead of wrapping, so a route
/// `A, B, C` is visited `A, B, C, B, A, B, ...`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    points: Vec<Vec2>,
    index: usize,
    reversed: bool,
}

impl PatrolRoute {
    /// Returns `None` for an empty route.
    pub fn new(points: Vec<Vec2>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            points,
            index: 0,
            reversed: false,
        })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn target(&self) -> Vec2 {
        self.points.get(self.index).copied().unwrap_or(Vec2::ZERO)
    }

    /// Moves to the next waypoint, turning around at either end.
    pub fn advance(&mut self) {
        let len = self.points.len();
        if len <= 1 {
            return;
        }
        if self.reversed {
            if self.index == 0 {
                self.reversed = false;
                self.index = 1;
            } else {
                self.index -= 1;
            }
        } else if self.index + 1 >= len {
            self.reversed = true;
            self.index = len - 2;
        } else {
            self.index += 1;
        }
    }

    /// Current target after advancing past any waypoint within `radius`.
    pub fn target_from(&mut self, position: Vec2, radius: f32) -> Vec2 {
        if distance(position, self.target()) <= radius {
            self.advance();
        }
        self.target()
    }
}

/// Random bounded destination for snakes without a route.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wander {
    target: Option<Vec2>,
}

impl Wander {
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn clear(&mut self) {
        self.target = None;
    }

    /// Keeps the current destination until the snake gets within `radius`,
    /// then draws a new one that fits a box of `size` inside the arena.
    ///
    /// Needs the RNG oracle; without it the snake has nowhere to go.
    pub fn target_from(
        &mut self,
        id: SnakeId,
        position: Vec2,
        size: Size,
        radius: f32,
        ctx: &TickContext<'_>,
        env: &SnakeEnv<'_>,
    ) -> Option<Vec2> {
        let arrived = self
            .target
            .is_some_and(|target| distance(position, target) <= radius);
        if self.target.is_none() || arrived {
            let rng = match env.rng() {
                Ok(rng) => rng,
                Err(err) => {
                    tracing::debug!(snake = %id, %err, "wander skipped");
                    return None;
                }
            };
            let max_x = (ctx.bounds.width - size.width).max(0.0);
            let max_y = (ctx.bounds.height - size.height).max(0.0);
            let next = Vec2::new(
                rng.range_f32(ctx.seed_for(id, roll::WANDER_X), 0.0, max_x),
                rng.range_f32(ctx.seed_for(id, roll::WANDER_Y), 0.0, max_y),
            );
            tracing::trace!(snake = %id, target = %next, "new wander target");
            self.target = Some(next);
        }
        self.target
    }
}

/// Where an idle snake walks: a fixed route, or random wandering.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Patrol {
    Route(PatrolRoute),
    Wander(Wander),
}

impl Default for Patrol {
    fn default() -> Self {
        Patrol::Wander(Wander::default())
    }
}

impl Patrol {
    /// Route when `points` is non-empty, wandering otherwise.
    pub fn from_points(points: Vec<Vec2>) -> Self {
        PatrolRoute::new(points).map_or_else(Patrol::default, Patrol::Route)
    }

    pub fn route(&self) -> Option<&PatrolRoute> {
        match self {
            Patrol::Route(route) => Some(route),
            Patrol::Wander(_) => None,
        }
    }

    pub fn next_target(
        &mut self,
        id: SnakeId,
        position: Vec2,
        size: Size,
        radius: f32,
        ctx: &TickContext<'_>,
        env: &SnakeEnv<'_>,
    ) -> Option<Vec2> {
        match self {
            Patrol::Route(route) => Some(route.target_from(position, radius)),
            Patrol::Wander(wander) => wander.target_from(id, position, size, radius, ctx, env),
        }
    }

    /// Gives up on the current target: the next waypoint, or a fresh wander
    /// destination on the following tick.
    pub fn skip(&mut self) {
        match self {
            Patrol::Route(route) => route.advance(),
            Patrol::Wander(wander) => wander.clear(),
        }
    }
}
