//! Rules engine adapter
//!
//! Wraps the external `shakmaty` rules library behind the small capability
//! surface the board controller consumes: legal-move queries, move
//! application, undo, and game-status questions. No chess rule is implemented
//! here; every legality decision is delegated to `shakmaty`.
//!
//! `shakmaty` positions are immutable values, so undo is realized by keeping
//! a snapshot of the pre-move position alongside each applied move. The
//! controller only ever calls [`RulesEngine::undo`] and never touches the
//! stack directly.
//!
//! # Click-level coordinates
//!
//! The UI works in from/to squares. Castling is presented the conventional
//! way for board UIs: the king moves two files (to the g- or c-file), even
//! though `shakmaty` encodes castling as king-takes-rook.

use bevy::prelude::*;
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, File, FromSetup, Move, Piece, Position, Role,
    Square,
};
use thiserror::Error;

/// Errors produced by the rules adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The requested from/to(/promotion) triple matches no legal move
    #[error("illegal move: {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    /// A position could not be constructed from the given FEN
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

/// Record of a move that was applied through the adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
    pub capture: bool,
    /// Standard Algebraic Notation, with `+`/`#` suffix
    pub san: String,
}

/// Classification of an opposing piece's move for the threat overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatKind {
    /// Destination is occupied by a defender
    Capture,
    /// Hypothetically applying the move leaves the defender in check
    Check,
}

/// One directional threat indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub from: Square,
    pub to: Square,
    pub kind: ThreatKind,
}

/// The rules engine resource
///
/// Owns the authoritative game state. The controller holds this resource and
/// only reads it (whose turn, board contents, check status) or requests
/// transitions (apply move, undo, reset).
#[derive(Resource, Debug, Clone)]
pub struct RulesEngine {
    position: Chess,
    undo_stack: Vec<(Chess, PlayedMove)>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine {
    /// New game from the standard starting position
    pub fn new() -> Self {
        Self {
            position: Chess::default(),
            undo_stack: Vec::new(),
        }
    }

    /// Build an engine from a FEN string (used by tests and diagnostics)
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let parsed: Fen = fen
            .parse()
            .map_err(|e| RulesError::InvalidPosition(format!("{e}")))?;
        let position = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| RulesError::InvalidPosition(format!("{e}")))?;
        Ok(Self {
            position,
            undo_stack: Vec::new(),
        })
    }

    /// Reset to the starting position and clear the undo stack
    pub fn reset(&mut self) {
        self.position = Chess::default();
        self.undo_stack.clear();
    }

    /// The side to move
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Piece occupying a square, if any
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// Read-only access to the underlying position
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of applied (undoable) moves
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// SAN notations of the applied moves, oldest first
    pub fn history(&self) -> Vec<&str> {
        self.undo_stack.iter().map(|(_, p)| p.san.as_str()).collect()
    }

    /// Legal destination squares for the piece on `from`
    pub fn destinations(&self, from: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = self
            .position
            .legal_moves()
            .iter()
            .filter_map(click_coords)
            .filter(|(f, _)| *f == from)
            .map(|(_, t)| t)
            .collect();
        targets.sort();
        targets.dedup();
        targets
    }

    /// Full legal move list as click-level triples
    pub fn all_moves(&self) -> Vec<(Square, Square, Option<Role>)> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| click_coords(m).map(|(f, t)| (f, t, m.promotion())))
            .collect()
    }

    /// Whether moving from `from` to `to` requires a promotion choice
    pub fn requires_promotion(&self, from: Square, to: Square) -> bool {
        self.position
            .legal_moves()
            .iter()
            .any(|m| click_coords(m) == Some((from, to)) && m.promotion().is_some())
    }

    /// Apply a move given in click-level coordinates
    ///
    /// Validates the triple against the legal move list, records SAN and a
    /// pre-move snapshot, and advances the position. A promoting pair with no
    /// explicit choice promotes to queen.
    pub fn apply(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<PlayedMove, RulesError> {
        let mv = self
            .find_move(from, to, promotion)
            .ok_or(RulesError::IllegalMove { from, to })?;

        let next = self
            .position
            .clone()
            .play(mv.clone())
            .map_err(|_| RulesError::IllegalMove { from, to })?;

        let mut san = San::from_move(&self.position, mv.clone()).to_string();
        if next.is_checkmate() {
            san.push('#');
        } else if next.is_check() {
            san.push('+');
        }

        let played = PlayedMove {
            from,
            to,
            promotion: mv.promotion(),
            capture: mv.is_capture(),
            san,
        };

        let previous = std::mem::replace(&mut self.position, next);
        self.undo_stack.push((previous, played.clone()));
        Ok(played)
    }

    /// Undo the most recent move
    ///
    /// Restores the pre-move snapshot and returns the undone move record, or
    /// `None` when no move has been applied.
    pub fn undo(&mut self) -> Option<PlayedMove> {
        let (previous, played) = self.undo_stack.pop()?;
        self.position = previous;
        Some(played)
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    /// Draw as the UI surfaces it: stalemate or insufficient material
    pub fn is_draw(&self) -> bool {
        self.position.is_stalemate() || self.position.is_insufficient_material()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// Classified moves of the side *not* to move, for the threat overlay
    ///
    /// Derives the opponent's legal moves through a null-move turn swap and
    /// classifies each as a capture (destination occupied by a defender) or a
    /// check-delivering move (applied hypothetically on a clone). While the
    /// side to move is already in check the swapped position is illegal, so
    /// no threats are reported.
    pub fn opponent_threats(&self) -> Vec<Threat> {
        let mut setup = self.position.to_setup(EnPassantMode::Legal);
        setup.turn = setup.turn.other();
        setup.ep_square = None;

        let Ok(flipped) = Chess::from_setup(setup, CastlingMode::Standard) else {
            return Vec::new();
        };

        let mut threats = Vec::new();
        for m in flipped.legal_moves().iter() {
            let Some((from, to)) = click_coords(m) else {
                continue;
            };
            if m.is_capture() {
                threats.push(Threat {
                    from,
                    to,
                    kind: ThreatKind::Capture,
                });
            } else if let Ok(after) = flipped.clone().play(m.clone()) {
                if after.is_check() {
                    threats.push(Threat {
                        from,
                        to,
                        kind: ThreatKind::Check,
                    });
                }
            }
        }
        threats
    }

    /// Resolve a click-level triple to a concrete legal move
    ///
    /// When the pair requires a promotion and no explicit role matches, the
    /// queen promotion is chosen.
    fn find_move(&self, from: Square, to: Square, promotion: Option<Role>) -> Option<Move> {
        let legals = self.position.legal_moves();
        let mut fallback = None;
        for m in legals.iter() {
            if click_coords(m) != Some((from, to)) {
                continue;
            }
            match (promotion, m.promotion()) {
                (None, None) => return Some(m.clone()),
                (Some(want), Some(got)) if want == got => return Some(m.clone()),
                (None, Some(Role::Queen)) => fallback = Some(m.clone()),
                _ => {}
            }
        }
        fallback
    }
}

/// Click-level (from, to) pair for a legal move
///
/// Castling is mapped to the king's two-file hop; drops (`Put`) do not occur
/// in standard chess.
fn click_coords(m: &Move) -> Option<(Square, Square)> {
    match *m {
        Move::Normal { from, to, .. } => Some((from, to)),
        Move::EnPassant { from, to } => Some((from, to)),
        Move::Castle { king, rook } => {
            let file = if rook.file() == File::H {
                File::G
            } else {
                File::C
            };
            Some((king, Square::from_coords(file, king.rank())))
        }
        Move::Put { .. } => None,
    }
}
