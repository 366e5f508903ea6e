//! ECS systems driving the board
//!
//! Input capture, click resolution, action handling, the computer turn phase
//! machine, move animation, status derivation and the threat overlay. All
//! game state decisions are delegated to [`crate::game::controller`]; these
//! systems only wire messages, timers and entities to it.

pub mod actions;
pub mod ai;
pub mod animation;
pub mod input;
pub mod status;
pub mod threat;
