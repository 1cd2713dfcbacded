use crate::agent::SnakeId;
use crate::geometry::{Vec2, distance};
use crate::tick::TickContext;
use crate::timer::{Countdown, CountdownStep};

/// Sight-driven chase with a lost-sight grace period.
///
/// Seeing the player latches their position and restarts the grace timer.
/// While the timer runs the snake heads for the last seen position; it gives
/// up when the timer expires or once it is within the give-up radius of that
/// point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pursuit {
    pub is_chasing: bool,
    pub last_seen: Option<Vec2>,
    pub lost_sight: Countdown,
}

impl Pursuit {
    /// Chase target for this tick, or `None` when the snake should patrol.
    pub(crate) fn update(
        &mut self,
        id: SnakeId,
        position: Vec2,
        seen: Option<Vec2>,
        ctx: &TickContext<'_>,
    ) -> Option<Vec2> {
        if let Some(player) = seen {
            if !self.is_chasing {
                tracing::debug!(snake = %id, %player, "acquired player");
            }
            self.is_chasing = true;
            self.last_seen = Some(player);
            self.lost_sight.start(ctx.config.lost_sight_grace);
            return Some(player);
        }

        if !self.is_chasing {
            return None;
        }
        if self.lost_sight.tick(ctx.dt) == CountdownStep::Expired {
            tracing::debug!(snake = %id, "lost sight grace expired");
            self.give_up();
            return None;
        }
        let target = self.last_seen?;
        if distance(position, target) <= ctx.config.give_up_radius {
            tracing::debug!(snake = %id, %target, "reached last seen position");
            self.give_up();
            return None;
        }
        Some(target)
    }

    pub(crate) fn give_up(&mut self) {
        self.is_chasing = false;
        self.last_seen = None;
        self.lost_sight.stop();
    }
}
