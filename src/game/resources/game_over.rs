//! Game over state tracking
//!
//! Derived from the rules engine after every state transition; never decided
//! locally. Once set to any non-Playing state, move input is rejected for
//! both sides, though reset and undo remain available.

use crate::rules::RulesEngine;
use bevy::prelude::*;
use shakmaty::Color;

/// Resource tracking the game's end state
#[derive(Resource, Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won by checkmate
    WhiteWon,

    /// Black won by checkmate
    BlackWon,

    /// Draw: the side to move has no legal moves but is not in check
    Stalemate,

    /// Draw: neither side can deliver checkmate
    InsufficientMaterial,
}

impl GameOverState {
    /// Derive the terminal status from the rules engine
    pub fn from_engine(engine: &RulesEngine) -> Self {
        if engine.is_checkmate() {
            match engine.turn() {
                Color::White => GameOverState::BlackWon,
                Color::Black => GameOverState::WhiteWon,
            }
        } else if engine.is_stalemate() {
            GameOverState::Stalemate
        } else if engine.is_insufficient_material() {
            GameOverState::InsufficientMaterial
        } else {
            GameOverState::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable result message for the status display
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "Checkmate - White wins!",
            GameOverState::BlackWon => "Checkmate - Black wins!",
            GameOverState::Stalemate => "Draw by stalemate",
            GameOverState::InsufficientMaterial => "Draw by insufficient material",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_is_playing() {
        let engine = RulesEngine::new();
        assert_eq!(GameOverState::from_engine(&engine), GameOverState::Playing);
        assert!(!GameOverState::from_engine(&engine).is_game_over());
    }

    #[test]
    fn test_checkmated_white_means_black_won() {
        // final position of the fool's mate
        let engine = RulesEngine::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3",
        )
        .unwrap();
        assert_eq!(GameOverState::from_engine(&engine), GameOverState::BlackWon);
    }

    #[test]
    fn test_stalemate_is_a_draw() {
        let engine = RulesEngine::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(
            GameOverState::from_engine(&engine),
            GameOverState::Stalemate
        );
        assert!(GameOverState::from_engine(&engine).is_game_over());
    }
}
