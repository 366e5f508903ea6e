//! Terminal status derivation

use bevy::prelude::*;

use crate::game::resources::GameOverState;
use crate::rules::RulesEngine;

/// Re-derive the terminal status whenever the position changes
pub fn update_game_status(engine: Res<RulesEngine>, mut status: ResMut<GameOverState>) {
    if !engine.is_changed() {
        return;
    }
    let next = GameOverState::from_engine(&engine);
    if next != *status {
        *status = next;
        if next.is_game_over() {
            info!("[GAME] {}", next.message());
        }
    }
}
