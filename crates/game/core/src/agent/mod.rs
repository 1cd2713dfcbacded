//! Snake agents: a shared motion envelope plus an archetype payload.
//!
//! Every snake carries the same [`Body`] (where it is, how fast it moves,
//! what it can sense). The [`Behavior`] enum holds exactly the state its
//! archetype needs, so a guard never carries rain trajectory fields and a
//! phantom never carries a patrol route.
mod patrol;
mod spawn;

use std::fmt;

pub use patrol::{Patrol, PatrolRoute, Wander};
pub use spawn::{BehaviorSpec, SnakeSpec, SpawnError};

use crate::behavior::{
    BossState, BursterState, GuardState, PhantomState, PhotophobicState, PlumberState, RainState,
    RattlesnakeState, ScreensaverState, SpitterState, StalkerState,
};
use crate::config::AiConfig;
use crate::geometry::{ArenaBounds, Rect, Size, Vec2};

/// Unique identifier of a snake within a level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SnakeId(pub u32);

impl fmt::Display for SnakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sensing ranges. A range of zero means the snake lacks that sense.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Senses {
    pub sight_range: f32,
    pub hearing_range: f32,
}

impl Senses {
    pub const NONE: Self = Self {
        sight_range: 0.0,
        hearing_range: 0.0,
    };

    pub const fn new(sight_range: f32, hearing_range: f32) -> Self {
        Self {
            sight_range,
            hearing_range,
        }
    }

    pub fn can_see(&self) -> bool {
        self.sight_range > 0.0
    }

    pub fn can_hear(&self) -> bool {
        self.hearing_range > 0.0
    }
}

/// When a snake takes part in the simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activation {
    #[default]
    Always,
    /// Only while the host reports this phase tag.
    DuringPhase(String),
    /// Only on this level index.
    OnLevel(u32),
}

impl Activation {
    pub fn is_active(&self, level: u32, phase: Option<&str>) -> bool {
        match self {
            Activation::Always => true,
            Activation::DuringPhase(wanted) => phase == Some(wanted.as_str()),
            Activation::OnLevel(wanted) => *wanted == level,
        }
    }
}

/// Motion envelope shared by every archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body {
    /// Top-left corner of the bounding box.
    pub position: Vec2,
    pub size: Size,
    /// Base speed in units per second.
    pub speed: f32,
    /// Speed while chasing; derived from the base speed when absent.
    pub chase_speed: Option<f32>,
    /// Last heading. Not renormalized every frame.
    pub direction: Vec2,
    pub senses: Senses,
}

impl Body {
    pub fn new(position: Vec2, size: Size, speed: f32) -> Self {
        Self {
            position,
            size,
            speed,
            chase_speed: None,
            direction: Vec2::ZERO,
            senses: Senses::NONE,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size.half()
    }

    pub fn pursuit_speed(&self, config: &AiConfig) -> f32 {
        self.chase_speed
            .unwrap_or(self.speed * config.chase_speed_multiplier)
    }

    /// Moves to `next`, updating the heading when the position changes.
    pub fn relocate(&mut self, next: Vec2) {
        if next != self.position && next.is_finite() {
            let heading = crate::geometry::direction_vector(self.position, next);
            if !heading.is_zero() {
                self.direction = heading;
            }
            self.position = next;
        }
    }
}

/// Closed set of snake archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    Stalker,
    Guard,
    Burster,
    Screensaver,
    Plumber,
    Spitter,
    Photophobic,
    Rattlesnake,
    Boss,
    Phantom,
    Rain,
}

impl Archetype {
    /// Archetypes that react to the player through sight.
    pub fn is_sighted(self) -> bool {
        matches!(
            self,
            Archetype::Guard
                | Archetype::Burster
                | Archetype::Spitter
                | Archetype::Photophobic
                | Archetype::Rattlesnake
        )
    }
}

/// Archetype-specific state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    Stalker(StalkerState),
    Guard(GuardState),
    Burster(BursterState),
    Screensaver(ScreensaverState),
    Plumber(PlumberState),
    Spitter(SpitterState),
    Photophobic(PhotophobicState),
    Rattlesnake(RattlesnakeState),
    Boss(BossState),
    Phantom(PhantomState),
    Rain(RainState),
}

impl Behavior {
    pub fn archetype(&self) -> Archetype {
        match self {
            Behavior::Stalker(_) => Archetype::Stalker,
            Behavior::Guard(_) => Archetype::Guard,
            Behavior::Burster(_) => Archetype::Burster,
            Behavior::Screensaver(_) => Archetype::Screensaver,
            Behavior::Plumber(_) => Archetype::Plumber,
            Behavior::Spitter(_) => Archetype::Spitter,
            Behavior::Photophobic(_) => Archetype::Photophobic,
            Behavior::Rattlesnake(_) => Archetype::Rattlesnake,
            Behavior::Boss(_) => Archetype::Boss,
            Behavior::Phantom(_) => Archetype::Phantom,
            Behavior::Rain(_) => Archetype::Rain,
        }
    }
}

/// A snake in play.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snake {
    pub id: SnakeId,
    pub body: Body,
    pub activation: Activation,
    pub behavior: Behavior,
}

impl Snake {
    pub fn new(id: SnakeId, body: Body, behavior: Behavior) -> Self {
        Self {
            id,
            body,
            activation: Activation::Always,
            behavior,
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn archetype(&self) -> Archetype {
        self.behavior.archetype()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    pub fn is_active(&self, level: u32, phase: Option<&str>) -> bool {
        self.activation.is_active(level, phase)
    }

    /// True for rain that has left the arena; other archetypes never do.
    pub fn is_off_screen(&self, bounds: ArenaBounds) -> bool {
        matches!(self.behavior, Behavior::Rain(_))
            && crate::behavior::is_off_screen(&self.body, bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn activation_gates_on_phase_and_level() {
        assert!(Activation::Always.is_active(3, None));

        let phased = Activation::DuringPhase("blackout".into());
        assert!(phased.is_active(0, Some("blackout")));
        assert!(!phased.is_active(0, Some("daylight")));
        assert!(!phased.is_active(0, None));

        let level = Activation::OnLevel(2);
        assert!(level.is_active(2, None));
        assert!(!level.is_active(1, None));
    }

    #[test]
    fn archetype_names_parse_case_insensitively() {
        assert_eq!(Archetype::from_str("Rattlesnake").unwrap(), Archetype::Rattlesnake);
        assert_eq!(Archetype::Screensaver.to_string(), "screensaver");
        assert!(Archetype::from_str("dragon").is_err());
    }

    #[test]
    fn pursuit_speed_falls_back_to_multiplier() {
        let config = AiConfig::default();
        let mut body = Body::new(Vec2::ZERO, Size::square(10.0), 40.0);
        assert_eq!(body.pursuit_speed(&config), 60.0);
        body.chase_speed = Some(90.0);
        assert_eq!(body.pursuit_speed(&config), 90.0);
    }

    #[test]
    fn relocate_tracks_heading() {
        let mut body = Body::new(Vec2::ZERO, Size::square(10.0), 40.0);
        body.relocate(Vec2::new(0.0, 5.0));
        assert_eq!(body.direction, Vec2::new(0.0, 1.0));
        body.relocate(Vec2::new(0.0, 5.0));
        assert_eq!(body.direction, Vec2::new(0.0, 1.0));
    }
}
