//! Display-only view flags
//!
//! Neither flag ever touches game state: `flipped` only changes the mapping
//! from logical (file, rank) to screen position, and `threat_overlay` only
//! controls whether threat indicators are drawn.

use bevy::prelude::*;

/// Resource holding board presentation flags
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Render with ranks/files visually reversed
    pub flipped: bool,

    /// Draw directional indicators for the opponent's captures and checks
    pub threat_overlay: bool,
}
