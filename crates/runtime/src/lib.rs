//! Synchronous level host for the snake simulation.
//!
//! This crate turns level content into live snakes and capability oracles,
//! then drives them one frame at a time. Consumers build a
//! [`LevelSimulation`] from a [`snake_content::LevelData`], feed it a
//! [`FrameInput`] per frame, and react to the [`SimEvent`]s it returns.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] owns snakes, walls, and the light puzzle and steps them
//! - [`oracle`] provides concrete tile-grid and lighting capabilities
//! - [`events`] defines frame inputs and the events a step produces
//! - [`config`] and [`error`] hold host settings and failures
pub mod config;
pub mod error;
pub mod events;
pub mod oracle;
pub mod simulation;

pub use config::SimConfig;
pub use error::{Result, RuntimeError};
pub use events::{FrameInput, SimEvent};
pub use oracle::{GridOracle, OracleManager, QuadrantLighting};
pub use simulation::LevelSimulation;
