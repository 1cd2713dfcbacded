//! Turning level data into snakes.
//!
//! All validation happens here, once, when a level is loaded. Handlers can
//! then assume finite coordinates, a non-empty body, and non-negative speeds.

use crate::agent::{Activation, Behavior, Body, Patrol, PatrolRoute, Senses, Snake, SnakeId};
use crate::behavior::{
    BossState, BounceDirections, BursterState, GuardState, PhantomState, PhotophobicState,
    PlumberState, RainPattern, RainState, RattlesnakeState, ScreensaverState, SpitterState,
    StalkerState,
};
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::geometry::{Rect, Size, Vec2};

/// Archetype and archetype-specific parameters of a snake in level data.
///
/// A `patrol` of `None` means the snake wanders (or, for spitters, bounces);
/// `Some` must contain at least one point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BehaviorSpec {
    Stalker {
        #[cfg_attr(feature = "serde", serde(default))]
        patrol: Option<Vec<Vec2>>,
    },
    Guard {
        #[cfg_attr(feature = "serde", serde(default))]
        patrol: Option<Vec<Vec2>>,
    },
    Burster {
        #[cfg_attr(feature = "serde", serde(default))]
        patrol: Option<Vec<Vec2>>,
        #[cfg_attr(feature = "serde", serde(default))]
        dash_speed: Option<f32>,
        #[cfg_attr(feature = "serde", serde(default))]
        dash_duration: Option<f32>,
    },
    Screensaver {
        #[cfg_attr(feature = "serde", serde(default))]
        directions: BounceDirections,
    },
    Plumber,
    Spitter {
        #[cfg_attr(feature = "serde", serde(default))]
        patrol: Option<Vec<Vec2>>,
    },
    Photophobic,
    /// The spawn position doubles as the pit.
    Rattlesnake {
        #[cfg_attr(feature = "serde", serde(default))]
        patrol: Option<Vec<Vec2>>,
    },
    Boss,
    Phantom {
        #[cfg_attr(feature = "serde", serde(default = "default_clockwise"))]
        clockwise: bool,
        #[cfg_attr(feature = "serde", serde(default))]
        circuit: Option<Rect>,
    },
    Rain {
        #[cfg_attr(feature = "serde", serde(default))]
        pattern: RainPattern,
    },
}

#[cfg(feature = "serde")]
fn default_clockwise() -> bool {
    true
}

/// Static description of one snake, as stored in a level file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnakeSpec {
    pub id: SnakeId,
    pub position: Vec2,
    pub size: Size,
    pub speed: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub chase_speed: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub senses: Senses,
    #[cfg_attr(feature = "serde", serde(default))]
    pub activation: Activation,
    pub behavior: BehaviorSpec,
}

/// Errors raised while validating level data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpawnError {
    #[error("snake {snake}: size {width}x{height} must be positive and finite")]
    InvalidSize {
        snake: SnakeId,
        width: f32,
        height: f32,
        context: ErrorContext,
    },

    #[error("snake {snake}: {field} {value} must be non-negative and finite")]
    InvalidMagnitude {
        snake: SnakeId,
        field: &'static str,
        value: f32,
        context: ErrorContext,
    },

    #[error("snake {snake}: {field} has a non-finite coordinate")]
    NonFinite {
        snake: SnakeId,
        field: &'static str,
        context: ErrorContext,
    },

    #[error("snake {snake}: patrol route is present but empty")]
    EmptyRoute {
        snake: SnakeId,
        context: ErrorContext,
    },
}

impl SpawnError {
    fn invalid_size(snake: SnakeId, size: Size) -> Self {
        Self::InvalidSize {
            snake,
            width: size.width,
            height: size.height,
            context: ErrorContext::new()
                .with_snake(snake)
                .with_message("invalid size"),
        }
    }

    fn invalid_magnitude(snake: SnakeId, field: &'static str, value: f32) -> Self {
        Self::InvalidMagnitude {
            snake,
            field,
            value,
            context: ErrorContext::new().with_snake(snake).with_message(field),
        }
    }

    fn non_finite(snake: SnakeId, field: &'static str) -> Self {
        Self::NonFinite {
            snake,
            field,
            context: ErrorContext::new().with_snake(snake).with_message(field),
        }
    }

    fn empty_route(snake: SnakeId) -> Self {
        Self::EmptyRoute {
            snake,
            context: ErrorContext::new()
                .with_snake(snake)
                .with_message("patrol"),
        }
    }

    pub fn snake(&self) -> SnakeId {
        match self {
            Self::InvalidSize { snake, .. }
            | Self::InvalidMagnitude { snake, .. }
            | Self::NonFinite { snake, .. }
            | Self::EmptyRoute { snake, .. } => *snake,
        }
    }
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::InvalidSize { context, .. }
            | Self::InvalidMagnitude { context, .. }
            | Self::NonFinite { context, .. }
            | Self::EmptyRoute { context, .. } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSize { .. } => "SPAWN_INVALID_SIZE",
            Self::InvalidMagnitude { .. } => "SPAWN_INVALID_MAGNITUDE",
            Self::NonFinite { .. } => "SPAWN_NON_FINITE",
            Self::EmptyRoute { .. } => "SPAWN_EMPTY_ROUTE",
        }
    }
}

impl SnakeSpec {
    /// Validates the spec and builds the snake in its initial state.
    ///
    /// # Errors
    ///
    /// Returns a [`SpawnError`] describing the first invalid field.
    pub fn spawn(&self) -> Result<Snake, SpawnError> {
        let id = self.id;
        if !self.position.is_finite() {
            return Err(SpawnError::non_finite(id, "position"));
        }
        let size_ok = |v: f32| v.is_finite() && v > 0.0;
        if !size_ok(self.size.width) || !size_ok(self.size.height) {
            return Err(SpawnError::invalid_size(id, self.size));
        }
        check_magnitude(id, "speed", self.speed)?;
        if let Some(chase) = self.chase_speed {
            check_magnitude(id, "chase_speed", chase)?;
        }
        check_magnitude(id, "sight_range", self.senses.sight_range)?;
        check_magnitude(id, "hearing_range", self.senses.hearing_range)?;

        let mut body = Body::new(self.position, self.size, self.speed);
        body.chase_speed = self.chase_speed;
        body.senses = self.senses;

        let behavior = self.behavior_state()?;
        Ok(Snake::new(id, body, behavior).with_activation(self.activation.clone()))
    }

    fn behavior_state(&self) -> Result<Behavior, SpawnError> {
        let id = self.id;
        let behavior = match &self.behavior {
            BehaviorSpec::Stalker { patrol } => {
                Behavior::Stalker(StalkerState::new(patrol_of(id, patrol.as_deref())?))
            }
            BehaviorSpec::Guard { patrol } => {
                Behavior::Guard(GuardState::new(patrol_of(id, patrol.as_deref())?))
            }
            BehaviorSpec::Burster {
                patrol,
                dash_speed,
                dash_duration,
            } => {
                if let Some(speed) = dash_speed {
                    check_magnitude(id, "dash_speed", *speed)?;
                }
                if let Some(duration) = dash_duration {
                    check_magnitude(id, "dash_duration", *duration)?;
                }
                Behavior::Burster(
                    BursterState::new(patrol_of(id, patrol.as_deref())?)
                        .with_dash(*dash_speed, *dash_duration),
                )
            }
            BehaviorSpec::Screensaver { directions } => {
                Behavior::Screensaver(ScreensaverState::new(*directions))
            }
            BehaviorSpec::Plumber => Behavior::Plumber(PlumberState::default()),
            BehaviorSpec::Spitter { patrol } => {
                Behavior::Spitter(SpitterState::new(route_of(id, patrol.as_deref())?))
            }
            BehaviorSpec::Photophobic => Behavior::Photophobic(PhotophobicState::default()),
            BehaviorSpec::Rattlesnake { patrol } => Behavior::Rattlesnake(RattlesnakeState::new(
                self.position,
                route_of(id, patrol.as_deref())?,
            )),
            BehaviorSpec::Boss => Behavior::Boss(BossState::default()),
            BehaviorSpec::Phantom { clockwise, circuit } => {
                if let Some(circuit) = circuit {
                    let corners_finite = circuit.origin().is_finite()
                        && circuit.width.is_finite()
                        && circuit.height.is_finite();
                    if !corners_finite || circuit.width < 0.0 || circuit.height < 0.0 {
                        return Err(SpawnError::non_finite(id, "circuit"));
                    }
                }
                Behavior::Phantom(PhantomState::new(self.position, *clockwise, *circuit))
            }
            BehaviorSpec::Rain { pattern } => {
                let finite = match pattern {
                    RainPattern::Straight => true,
                    RainPattern::Angled { angle_deg } => angle_deg.is_finite(),
                    RainPattern::Sine {
                        amplitude,
                        frequency,
                    } => amplitude.is_finite() && frequency.is_finite(),
                };
                if !finite {
                    return Err(SpawnError::non_finite(id, "pattern"));
                }
                Behavior::Rain(RainState::new(*pattern, self.position.x))
            }
        };
        Ok(behavior)
    }
}

fn check_magnitude(id: SnakeId, field: &'static str, value: f32) -> Result<(), SpawnError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SpawnError::invalid_magnitude(id, field, value))
    }
}

fn route_of(id: SnakeId, points: Option<&[Vec2]>) -> Result<Option<PatrolRoute>, SpawnError> {
    let Some(points) = points else {
        return Ok(None);
    };
    if points.iter().any(|point| !point.is_finite()) {
        return Err(SpawnError::non_finite(id, "patrol"));
    }
    PatrolRoute::new(points.to_vec())
        .map(Some)
        .ok_or_else(|| SpawnError::empty_route(id))
}

fn patrol_of(id: SnakeId, points: Option<&[Vec2]>) -> Result<Patrol, SpawnError> {
    Ok(route_of(id, points)?.map_or_else(Patrol::default, Patrol::Route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Archetype;

    fn spec(behavior: BehaviorSpec) -> SnakeSpec {
        SnakeSpec {
            id: SnakeId(7),
            position: Vec2::new(40.0, 60.0),
            size: Size::new(20.0, 20.0),
            speed: 50.0,
            chase_speed: None,
            senses: Senses::new(150.0, 0.0),
            activation: Activation::Always,
            behavior,
        }
    }

    #[test]
    fn spawns_every_archetype() {
        let specs = [
            BehaviorSpec::Stalker { patrol: None },
            BehaviorSpec::Guard {
                patrol: Some(vec![Vec2::ZERO]),
            },
            BehaviorSpec::Burster {
                patrol: None,
                dash_speed: Some(300.0),
                dash_duration: None,
            },
            BehaviorSpec::Screensaver {
                directions: BounceDirections::Four,
            },
            BehaviorSpec::Plumber,
            BehaviorSpec::Spitter { patrol: None },
            BehaviorSpec::Photophobic,
            BehaviorSpec::Rattlesnake { patrol: None },
            BehaviorSpec::Boss,
            BehaviorSpec::Phantom {
                clockwise: false,
                circuit: None,
            },
            BehaviorSpec::Rain {
                pattern: RainPattern::Straight,
            },
        ];
        let archetypes: Vec<Archetype> = specs
            .into_iter()
            .map(|behavior| spec(behavior).spawn().expect("valid spec").archetype())
            .collect();
        assert_eq!(archetypes.len(), 11);
        assert_eq!(archetypes[0], Archetype::Stalker);
        assert_eq!(archetypes[10], Archetype::Rain);
    }

    #[test]
    fn rattlesnake_pit_is_its_spawn_point() {
        let snake = spec(BehaviorSpec::Rattlesnake { patrol: None })
            .spawn()
            .expect("valid spec");
        let Behavior::Rattlesnake(state) = snake.behavior else {
            panic!("expected a rattlesnake");
        };
        assert_eq!(state.pit, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn rejects_degenerate_bodies() {
        let mut bad = spec(BehaviorSpec::Boss);
        bad.size = Size::new(0.0, 10.0);
        let err = bad.spawn().unwrap_err();
        assert_eq!(err.error_code(), "SPAWN_INVALID_SIZE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.snake(), SnakeId(7));

        let mut bad = spec(BehaviorSpec::Boss);
        bad.speed = -1.0;
        assert_eq!(bad.spawn().unwrap_err().error_code(), "SPAWN_INVALID_MAGNITUDE");

        let mut bad = spec(BehaviorSpec::Boss);
        bad.position = Vec2::new(f32::NAN, 0.0);
        assert_eq!(bad.spawn().unwrap_err().error_code(), "SPAWN_NON_FINITE");
    }

    #[test]
    fn rejects_empty_routes() {
        let err = spec(BehaviorSpec::Guard {
            patrol: Some(Vec::new()),
        })
        .spawn()
        .unwrap_err();
        assert!(matches!(err, SpawnError::EmptyRoute { .. }));
        assert!(err.to_string().contains("#7"));
    }
}
