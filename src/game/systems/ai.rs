//! Computer turn phase machine
//!
//! Idle -> Thinking (timer) -> Animating (glyph in flight) -> committed.
//! The move is only applied to the rules engine after the glide finishes, so
//! an undo or reset during the animation simply invalidates the generation
//! token and the move is dropped without ever touching game state.

use bevy::prelude::*;

use crate::core::GameSettings;
use crate::game::components::{AnimatingGlyph, MoveAnimation};
use crate::game::controller;
use crate::game::resources::{
    AiPhase, AiTurn, BoardView, MoveLog, PendingPromotion, Players, RedoStack, Selection,
};
use crate::rendering::board::{piece_glyph, square_to_world, PieceGlyph, ANIM_Z, TILE_SIZE};
use crate::rules::RulesEngine;

/// Advance the computer turn through Idle and Thinking
#[allow(clippy::too_many_arguments)]
pub fn ai_turn_system(
    mut commands: Commands,
    time: Res<Time>,
    mut ai: ResMut<AiTurn>,
    engine: Res<RulesEngine>,
    players: Res<Players>,
    pending: Res<PendingPromotion>,
    redo: Res<RedoStack>,
    settings: Res<GameSettings>,
    view: Res<BoardView>,
    mut glyphs: Query<(&PieceGlyph, &mut Visibility)>,
) {
    // the redo gate keeps the computer from instantly replaying over an
    // undone position; it wakes up once the human makes a fresh move
    if matches!(ai.phase, AiPhase::Idle) {
        let should_start = engine.turn() == players.ai
            && !engine.is_game_over()
            && !pending.is_active()
            && redo.is_empty();
        if should_start {
            ai.start_thinking(settings.ai_think_seconds);
            debug!("[AI] thinking as {:?}", players.ai);
        }
        return;
    }

    let mut thinking_done = false;
    if let AiPhase::Thinking { timer } = &mut ai.phase {
        timer.tick(time.delta());
        thinking_done = timer.is_finished();
    }
    if !thinking_done {
        return;
    }

    let mut rng = rand::rng();
    let Some(mv) = controller::choose_random_move(&engine, &mut rng) else {
        // terminal position; the status system reports the result
        ai.invalidate();
        return;
    };

    let Some(piece) = engine.piece_at(mv.from) else {
        warn!("[AI] chosen move has no source piece, dropping");
        ai.invalidate();
        return;
    };

    let from_pos = square_to_world(mv.from, view.flipped).extend(ANIM_Z);
    let to_pos = square_to_world(mv.to, view.flipped).extend(ANIM_Z);
    let (text, tint) = piece_glyph(piece);
    commands.spawn((
        AnimatingGlyph,
        MoveAnimation::new(from_pos, to_pos, settings.move_anim_seconds),
        Text2d::new(text),
        TextFont {
            font_size: TILE_SIZE * 0.62,
            ..default()
        },
        TextColor(tint),
        Transform::from_translation(from_pos),
    ));
    for (glyph, mut visibility) in &mut glyphs {
        if glyph.square == mv.from {
            *visibility = Visibility::Hidden;
        }
    }

    ai.start_animating(mv);
    debug!("[AI] chose {} -> {}", mv.from, mv.to);
}

/// Commit the animated move once its glyph is gone
///
/// The generation token must still match; a reset or undo during the glide
/// bumps it and the move is discarded.
pub fn ai_commit_system(
    mut ai: ResMut<AiTurn>,
    anim_glyphs: Query<(), With<AnimatingGlyph>>,
    mut engine: ResMut<RulesEngine>,
    mut selection: ResMut<Selection>,
    mut log: ResMut<MoveLog>,
    mut redo: ResMut<RedoStack>,
) {
    let AiPhase::Animating { mv, generation } = ai.phase else {
        return;
    };
    if !anim_glyphs.is_empty() {
        return;
    }
    ai.phase = AiPhase::Idle;
    if generation != ai.generation {
        debug!("[AI] move invalidated before commit, dropping");
        return;
    }
    match controller::apply_move(
        &mut engine,
        &mut selection,
        &mut log,
        &mut redo,
        mv.from,
        mv.to,
        mv.promotion,
    ) {
        Ok(played) => info!("[AI] played {}", played.san),
        Err(err) => warn!("[AI] commit failed: {}", err),
    }
}
