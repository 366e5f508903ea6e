//! Game resources - controller state shared across systems
//!
//! Resources are ECS singletons; every piece of controller state from the
//! board interaction model lives here:
//!
//! - [`Selection`] - selected square and its legal destinations
//! - [`MoveLog`] / [`RedoStack`] - linear move history with undo/redo
//! - [`Players`] - random human/computer side assignment
//! - [`AiTurn`] - computer turn phase, the advisory lock over mutation
//! - [`BoardView`] - display-only orientation and threat-overlay flags
//! - [`PendingPromotion`] - promotion prompt state
//! - [`GameOverState`] - terminal status derived from the rules engine
//!
//! All resources are registered in [`crate::game::plugin::GamePlugin`]. The
//! decision logic that mutates them lives in [`crate::game::controller`] as
//! plain functions, so they can be exercised in tests without a window.

pub mod ai;
pub mod game_over;
pub mod history;
pub mod players;
pub mod promotion;
pub mod selection;
pub mod view;

pub use ai::{AiPhase, AiTurn, ChosenMove};
pub use game_over::GameOverState;
pub use history::{MoveLog, RedoEntry, RedoStack};
pub use players::Players;
pub use promotion::{PendingPromotion, PromotionSelected};
pub use selection::Selection;
pub use view::BoardView;
