//! Errors surfaced by the runtime API.
//!
//! Level setup is the only fallible phase: once a [`crate::LevelSimulation`]
//! exists, stepping it cannot fail.
use snake_core::{ErrorContext, ErrorSeverity, GameError, SpawnError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error("tile grid {cols}x{rows} needs {expected} tiles, found {found}")]
    InvalidGrid {
        cols: u32,
        rows: u32,
        expected: usize,
        found: usize,
    },

    #[error("level has no light puzzle")]
    NoLightPuzzle,

    #[error("mirror {index} does not exist (level has {count})")]
    UnknownMirror { index: usize, count: usize },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Spawn(err) => err.severity(),
            RuntimeError::InvalidGrid { .. } => ErrorSeverity::Validation,
            RuntimeError::NoLightPuzzle | RuntimeError::UnknownMirror { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            RuntimeError::Spawn(err) => err.context(),
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Spawn(err) => err.error_code(),
            RuntimeError::InvalidGrid { .. } => "RUNTIME_INVALID_GRID",
            RuntimeError::NoLightPuzzle => "RUNTIME_NO_LIGHT_PUZZLE",
            RuntimeError::UnknownMirror { .. } => "RUNTIME_UNKNOWN_MIRROR",
        }
    }
}
