//! Core game logic for the number-guessing game
//!
//! This module contains the session state machine without any console I/O.
//! The secret is drawn through an injected [`SecretSource`] so sessions can be
//! driven deterministically.

pub mod config;
pub mod outcome;
pub mod random;
pub mod session;

// Re-export commonly used types
pub use config::GameConfig;
pub use outcome::{GuessOutcome, SessionResult};
pub use random::{FixedSecret, SecretSource};
pub use session::GuessingSession;
