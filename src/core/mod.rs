//! Core module - application infrastructure
//!
//! Holds the pieces of the application that are not chess-specific: the
//! settings resource with its JSON persistence, and the error types backing
//! it. Game state itself lives in [`crate::game`]; all rule questions are
//! answered by [`crate::rules`].

pub mod error;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{load_settings_system, save_settings_system, GameSettings};
