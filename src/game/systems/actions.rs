//! Handlers for the side panel and keyboard action messages

use bevy::prelude::*;

use crate::core::GameSettings;
use crate::game::components::AnimatingGlyph;
use crate::game::controller;
use crate::game::events::{
    FlipBoardRequested, NewGameRequested, RedoRequested, ThreatOverlayToggled, UndoRequested,
};
use crate::game::resources::{
    AiTurn, BoardView, MoveLog, PendingPromotion, Players, PromotionSelected, RedoStack,
    Selection,
};
use crate::rules::RulesEngine;

pub fn handle_undo_requested(
    mut messages: MessageReader<UndoRequested>,
    mut engine: ResMut<RulesEngine>,
    mut selection: ResMut<Selection>,
    mut log: ResMut<MoveLog>,
    mut redo: ResMut<RedoStack>,
    mut ai: ResMut<AiTurn>,
    pending: Res<PendingPromotion>,
) {
    for _ in messages.read() {
        // the promotion prompt owns the board until a choice lands
        if pending.is_active() {
            continue;
        }
        let busy = ai.is_busy();
        if let Some(played) = controller::undo_move(&mut engine, &mut selection, &mut log, &mut redo, busy)
        {
            ai.invalidate();
            info!("[GAME] undid {}", played.san);
        }
    }
}

pub fn handle_redo_requested(
    mut messages: MessageReader<RedoRequested>,
    mut engine: ResMut<RulesEngine>,
    mut selection: ResMut<Selection>,
    mut log: ResMut<MoveLog>,
    mut redo: ResMut<RedoStack>,
    ai: Res<AiTurn>,
    pending: Res<PendingPromotion>,
) {
    for _ in messages.read() {
        if pending.is_active() {
            continue;
        }
        if let Some(played) =
            controller::redo_move(&mut engine, &mut selection, &mut log, &mut redo, ai.is_busy())
        {
            info!("[GAME] redid {}", played.san);
        }
    }
}

/// Start over: fresh position, new random side assignment, cleared view
#[allow(clippy::too_many_arguments)]
pub fn handle_new_game_requested(
    mut messages: MessageReader<NewGameRequested>,
    mut commands: Commands,
    mut engine: ResMut<RulesEngine>,
    mut selection: ResMut<Selection>,
    mut log: ResMut<MoveLog>,
    mut redo: ResMut<RedoStack>,
    mut players: ResMut<Players>,
    mut view: ResMut<BoardView>,
    mut ai: ResMut<AiTurn>,
    mut pending: ResMut<PendingPromotion>,
    settings: Res<GameSettings>,
    anim_glyphs: Query<Entity, With<AnimatingGlyph>>,
) {
    if messages.read().next().is_none() {
        return;
    }
    messages.clear();

    let mut rng = rand::rng();
    controller::start_new_game(
        &mut engine,
        &mut selection,
        &mut log,
        &mut redo,
        &mut players,
        &mut view,
        &mut ai,
        settings.threat_overlay_default,
        &mut rng,
    );
    pending.clear();
    for entity in &anim_glyphs {
        commands.entity(entity).despawn();
    }
    info!("[GAME] new game, human plays {:?}", players.human);
}

pub fn handle_flip_board(
    mut messages: MessageReader<FlipBoardRequested>,
    mut view: ResMut<BoardView>,
) {
    for _ in messages.read() {
        view.flipped = !view.flipped;
        debug!("[GAME] board flipped: {}", view.flipped);
    }
}

pub fn handle_threat_overlay_toggled(
    mut messages: MessageReader<ThreatOverlayToggled>,
    mut view: ResMut<BoardView>,
) {
    for _ in messages.read() {
        view.threat_overlay = !view.threat_overlay;
        debug!("[GAME] threat overlay: {}", view.threat_overlay);
    }
}

/// Complete a pending promotion with the piece the player picked
pub fn handle_promotion_selected(
    mut messages: MessageReader<PromotionSelected>,
    mut engine: ResMut<RulesEngine>,
    mut selection: ResMut<Selection>,
    mut log: ResMut<MoveLog>,
    mut redo: ResMut<RedoStack>,
    mut pending: ResMut<PendingPromotion>,
) {
    for selected in messages.read() {
        if !pending.is_active() {
            continue;
        }
        let (Some(from), Some(to)) = (pending.from, pending.to) else {
            pending.clear();
            continue;
        };
        match controller::resolve_promotion(
            &mut engine,
            &mut selection,
            &mut log,
            &mut redo,
            from,
            to,
            Some(selected.role),
        ) {
            Ok(played) => info!("[INPUT] promoted: {}", played.san),
            Err(err) => warn!("[INPUT] promotion failed: {}", err),
        }
        pending.clear();
    }
}
