//! Computer opponent turn state
//!
//! [`AiTurn`] is the single advisory lock over game state mutation: while the
//! phase is anything but `Idle`, every human-originated interaction is
//! rejected. The phase walks `Idle → Thinking → Animating → Idle`; the
//! authoritative move is applied only when the animation completes.
//!
//! A session generation counter guards against stale completions: `reset()`
//! and `undo()` bump it, and a pending animation is committed only if the
//! generation it was scheduled under still matches.

use bevy::prelude::*;
use shakmaty::{Role, Square};

/// The move the computer has committed to playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

/// Phase of the computer's turn
#[derive(Debug, Default, Clone)]
pub enum AiPhase {
    /// Not the computer's turn, or waiting for one to begin
    #[default]
    Idle,

    /// Fixed "thinking" delay before the move is selected
    Thinking { timer: Timer },

    /// Move selected, temporary glyph gliding across the board
    Animating { mv: ChosenMove, generation: u64 },
}

/// Resource tracking the computer opponent's turn
#[derive(Resource, Debug, Default)]
pub struct AiTurn {
    pub phase: AiPhase,
    pub generation: u64,
}

impl AiTurn {
    /// Whether human input must be rejected
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, AiPhase::Idle)
    }

    /// Cancel any pending turn and invalidate in-flight completions
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = AiPhase::Idle;
    }

    pub fn start_thinking(&mut self, seconds: f32) {
        self.phase = AiPhase::Thinking {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        };
    }

    pub fn start_animating(&mut self, mv: ChosenMove) {
        self.phase = AiPhase::Animating {
            mv,
            generation: self.generation,
        };
    }
}
