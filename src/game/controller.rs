//! Board interaction decision logic
//!
//! Pure functions over the game resources: no rendering, no timers, no ECS
//! queries. The systems in [`crate::game::systems`] translate input and timer
//! messages into calls here and handle the visual side effects, which keeps
//! the whole interaction state machine testable without a window.
//!
//! Invalid preconditions (wrong turn, computer busy, empty history, no piece
//! on the clicked square) are absorbed as no-ops; nothing is surfaced beyond
//! the board not responding.

use crate::game::resources::{ChosenMove, MoveLog, Players, RedoEntry, RedoStack, Selection};
use crate::rules::{PlayedMove, RulesEngine, RulesError};
use rand::Rng;
use shakmaty::{Role, Square};

/// Result of a square click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Precondition failed; nothing changed
    Ignored,
    /// A piece of the side to move was selected
    Selected,
    /// The selection was cleared
    Deselected,
    /// A move was applied
    Moved(PlayedMove),
    /// The clicked destination requires a promotion choice
    PromotionPending { from: Square, to: Square },
}

/// Handle a click on `square`
///
/// No-op while the computer is busy, when it is not the human's turn, or
/// once the game has ended. A click on a legal destination either applies
/// the move or asks for a promotion choice; a click on an own piece selects
/// it; anything else clears the selection.
pub fn handle_square_click(
    engine: &mut RulesEngine,
    selection: &mut Selection,
    log: &mut MoveLog,
    redo: &mut RedoStack,
    players: &Players,
    ai_busy: bool,
    square: Square,
) -> ClickOutcome {
    if ai_busy || !players.is_human_turn(engine.turn()) || engine.is_game_over() {
        return ClickOutcome::Ignored;
    }

    if selection.is_target(square) {
        let Some(from) = selection.selected else {
            return ClickOutcome::Ignored;
        };
        if engine.requires_promotion(from, square) {
            return ClickOutcome::PromotionPending { from, to: square };
        }
        return match apply_move(engine, selection, log, redo, from, square, None) {
            Ok(played) => ClickOutcome::Moved(played),
            Err(_) => ClickOutcome::Ignored,
        };
    }

    match engine.piece_at(square) {
        Some(piece) if piece.color == engine.turn() => {
            selection.selected = Some(square);
            selection.targets = engine.destinations(square);
            ClickOutcome::Selected
        }
        _ => {
            selection.clear();
            ClickOutcome::Deselected
        }
    }
}

/// Apply a validated move and keep the surrounding state consistent
///
/// Clears the selection and the redo stack and appends to the move log.
/// This is the single path through which both human and computer moves are
/// committed.
pub fn apply_move(
    engine: &mut RulesEngine,
    selection: &mut Selection,
    log: &mut MoveLog,
    redo: &mut RedoStack,
    from: Square,
    to: Square,
    promotion: Option<Role>,
) -> Result<PlayedMove, RulesError> {
    let played = engine.apply(from, to, promotion)?;
    selection.clear();
    redo.clear();
    log.push(played.clone());
    Ok(played)
}

/// Complete a pending promotion with the player's choice
///
/// Anything other than queen/rook/bishop/knight (including no choice at all)
/// falls back to queen.
pub fn resolve_promotion(
    engine: &mut RulesEngine,
    selection: &mut Selection,
    log: &mut MoveLog,
    redo: &mut RedoStack,
    from: Square,
    to: Square,
    choice: Option<Role>,
) -> Result<PlayedMove, RulesError> {
    let role = match choice {
        Some(r @ (Role::Queen | Role::Rook | Role::Bishop | Role::Knight)) => r,
        _ => Role::Queen,
    };
    apply_move(engine, selection, log, redo, from, to, Some(role))
}

/// Undo the most recent move
///
/// No-op while the computer is busy or when the history is empty. The undone
/// move is pushed onto the redo stack.
pub fn undo_move(
    engine: &mut RulesEngine,
    selection: &mut Selection,
    log: &mut MoveLog,
    redo: &mut RedoStack,
    ai_busy: bool,
) -> Option<PlayedMove> {
    if ai_busy || log.is_empty() {
        return None;
    }
    let played = engine.undo()?;
    log.moves.pop();
    redo.push(RedoEntry {
        from: played.from,
        to: played.to,
        promotion: played.promotion,
    });
    selection.clear();
    Some(played)
}

/// Reapply the most recently undone move
///
/// No-op while the computer is busy or when the redo stack is empty. The
/// move is replayed with the same destination and promotion fields.
pub fn redo_move(
    engine: &mut RulesEngine,
    selection: &mut Selection,
    log: &mut MoveLog,
    redo: &mut RedoStack,
    ai_busy: bool,
) -> Option<PlayedMove> {
    if ai_busy {
        return None;
    }
    let entry = redo.pop()?;
    let played = engine.apply(entry.from, entry.to, entry.promotion).ok()?;
    selection.clear();
    log.push(played.clone());
    Some(played)
}

/// Start a fresh session
///
/// Reassigns sides uniformly at random, reinitializes the position, clears
/// selection/history/redo, resets the view flags to their defaults, and
/// invalidates any in-flight computer turn.
#[allow(clippy::too_many_arguments)]
pub fn start_new_game<R: Rng + ?Sized>(
    engine: &mut RulesEngine,
    selection: &mut Selection,
    log: &mut MoveLog,
    redo: &mut RedoStack,
    players: &mut Players,
    view: &mut crate::game::resources::BoardView,
    ai: &mut crate::game::resources::AiTurn,
    overlay_default: bool,
    rng: &mut R,
) {
    engine.reset();
    selection.clear();
    log.clear();
    redo.clear();
    players.randomize(rng);
    view.flipped = false;
    view.threat_overlay = overlay_default;
    ai.invalidate();
}

/// Select one legal move uniformly at random
///
/// Returns `None` in terminal positions; the status display, derived
/// independently from the rules engine, reports checkmate or stalemate.
pub fn choose_random_move<R: Rng + ?Sized>(
    engine: &RulesEngine,
    rng: &mut R,
) -> Option<ChosenMove> {
    let moves = engine.all_moves();
    if moves.is_empty() {
        return None;
    }
    let (from, to, promotion) = moves[rng.random_range(0..moves.len())];
    Some(ChosenMove {
        from,
        to,
        promotion,
    })
}
