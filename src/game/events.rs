//! Game interaction messages
//!
//! Written by the input systems and the side panel, consumed by the handlers
//! in [`crate::game::systems`]. Keeping UI widgets and keyboard shortcuts on
//! the same message types means every action has exactly one handler.

use bevy::prelude::*;
use shakmaty::Square;

/// The player clicked a board square
#[derive(Message, Debug, Clone, Copy)]
pub struct SquareClicked {
    pub square: Square,
}

/// Request to take back the most recent move
#[derive(Message, Debug, Clone, Copy)]
pub struct UndoRequested;

/// Request to replay the most recently undone move
#[derive(Message, Debug, Clone, Copy)]
pub struct RedoRequested;

/// Request to abandon the current game and start over
#[derive(Message, Debug, Clone, Copy)]
pub struct NewGameRequested;

/// Request to reverse the board orientation
#[derive(Message, Debug, Clone, Copy)]
pub struct FlipBoardRequested;

/// Request to toggle the threat overlay
#[derive(Message, Debug, Clone, Copy)]
pub struct ThreatOverlayToggled;
