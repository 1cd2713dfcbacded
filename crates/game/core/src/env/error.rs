//! Capability access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when a handler needs a capability the host did not inject.
///
/// Handlers treat these as "skip this tick": the snake is returned unchanged
/// and the host can provide the capability on a later tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("TileGridOracle not available")]
    TilesNotAvailable,

    #[error("LightingOracle not available")]
    LightingNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::TilesNotAvailable => "ORACLE_TILES_NOT_AVAILABLE",
            OracleError::LightingNotAvailable => "ORACLE_LIGHTING_NOT_AVAILABLE",
            OracleError::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
