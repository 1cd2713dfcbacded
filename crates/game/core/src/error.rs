//! Common error infrastructure for snake-core.
//!
//! Ticks never fail: handlers degrade to no-ops instead of returning errors.
//! Errors only surface at the edges, when level data is turned into agents
//! ([`crate::agent::SpawnError`]) or when a handler asks the environment for a
//! capability the host did not provide ([`crate::env::OracleError`]).

use crate::agent::SnakeId;
use crate::geometry::Vec2;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the agent skips this tick and retries on the next one
/// - **Validation**: level data is invalid and must be fixed before loading
/// - **Internal**: unexpected inconsistency that deserves investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorContext {
    pub snake: Option<SnakeId>,
    pub position: Option<Vec2>,
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snake: None,
            position: None,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_snake(mut self, snake: SnakeId) -> Self {
        self.snake = Some(snake);
        self
    }

    #[must_use]
    pub const fn with_position(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Common trait for all snake-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Static identifier for this error variant, stable across releases.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
