//! Number Guess - a console number-guessing game
//!
//! This library provides:
//! - Core session logic (game module)
//! - Console message templates (render module)
//! - The interactive console driver (modes module)

pub mod error;
pub mod game;
pub mod metrics;
pub mod modes;
pub mod render;

pub use error::{GameError, GameResult};
