//! Countdown timers embedded in snake state.
//!
//! Every grace period, search window, dash, and pause in the handlers is a
//! [`Countdown`]. Timers advance only by the tick delta handed to the
//! handler, never by wall-clock time.

/// What happened to a countdown during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    /// The timer was not running.
    Idle,
    /// The timer is still running after this tick.
    Running,
    /// The timer reached zero during this tick and is now idle.
    Expired,
}

/// A stoppable countdown measured in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown {
    remaining: Option<f32>,
}

impl Countdown {
    pub const IDLE: Self = Self { remaining: None };

    pub fn running(duration: f32) -> Self {
        let mut timer = Self::IDLE;
        timer.start(duration);
        timer
    }

    /// (Re)starts the countdown; non-positive durations leave it idle.
    pub fn start(&mut self, duration: f32) {
        self.remaining = (duration > 0.0 && duration.is_finite()).then_some(duration);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left, or `0.0` when idle.
    pub fn remaining(&self) -> f32 {
        self.remaining.unwrap_or(0.0)
    }

    /// Advances the countdown by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> CountdownStep {
        let Some(remaining) = self.remaining else {
            return CountdownStep::Idle;
        };
        let left = remaining - dt.max(0.0);
        if left <= 0.0 {
            self.remaining = None;
            CountdownStep::Expired
        } else {
            self.remaining = Some(left);
            CountdownStep::Running
        }
    }
}
