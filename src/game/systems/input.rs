//! Mouse and keyboard input systems

use bevy::prelude::*;

use crate::game::controller::{self, ClickOutcome};
use crate::game::events::{
    FlipBoardRequested, NewGameRequested, RedoRequested, SquareClicked, ThreatOverlayToggled,
    UndoRequested,
};
use crate::game::resources::{
    AiTurn, BoardView, MoveLog, PendingPromotion, Players, RedoStack, Selection,
};
use crate::rendering::board::world_to_square;
use crate::rules::RulesEngine;

/// Translate left clicks into [`SquareClicked`] messages
///
/// Clicks outside the board are dropped here, never reaching the click
/// handler.
pub fn board_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    view: Res<BoardView>,
    mut clicks: MessageWriter<SquareClicked>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };
    if let Some(square) = world_to_square(world_pos, view.flipped) {
        debug!("[INPUT] clicked {}", square);
        clicks.write(SquareClicked { square });
    }
}

/// Keyboard shortcuts mirroring the side panel buttons
///
/// Ctrl+Z undo, Ctrl+Y redo, N new game, F flip board, T threat overlay.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut undo: MessageWriter<UndoRequested>,
    mut redo: MessageWriter<RedoRequested>,
    mut new_game: MessageWriter<NewGameRequested>,
    mut flip: MessageWriter<FlipBoardRequested>,
    mut threat: MessageWriter<ThreatOverlayToggled>,
) {
    let ctrl = keys.pressed(KeyCode::ControlLeft) || keys.pressed(KeyCode::ControlRight);
    if ctrl && keys.just_pressed(KeyCode::KeyZ) {
        undo.write(UndoRequested);
    }
    if ctrl && keys.just_pressed(KeyCode::KeyY) {
        redo.write(RedoRequested);
    }
    if !ctrl && keys.just_pressed(KeyCode::KeyN) {
        new_game.write(NewGameRequested);
    }
    if !ctrl && keys.just_pressed(KeyCode::KeyF) {
        flip.write(FlipBoardRequested);
    }
    if !ctrl && keys.just_pressed(KeyCode::KeyT) {
        threat.write(ThreatOverlayToggled);
    }
}

/// Resolve clicked squares through the controller
///
/// Board input is frozen while a promotion prompt is open; the prompt is the
/// only way forward.
#[allow(clippy::too_many_arguments)]
pub fn handle_square_clicked(
    mut clicks: MessageReader<SquareClicked>,
    mut engine: ResMut<RulesEngine>,
    mut selection: ResMut<Selection>,
    mut log: ResMut<MoveLog>,
    mut redo: ResMut<RedoStack>,
    mut pending: ResMut<PendingPromotion>,
    players: Res<Players>,
    ai: Res<AiTurn>,
) {
    for click in clicks.read() {
        if pending.is_active() {
            continue;
        }
        let outcome = controller::handle_square_click(
            &mut engine,
            &mut selection,
            &mut log,
            &mut redo,
            &players,
            ai.is_busy(),
            click.square,
        );
        match outcome {
            ClickOutcome::Moved(played) => {
                info!("[INPUT] played {}", played.san);
            }
            ClickOutcome::PromotionPending { from, to } => {
                let color = engine.turn();
                pending.start(from, to, color);
                debug!("[INPUT] promotion pending {} -> {}", from, to);
            }
            ClickOutcome::Selected => {
                debug!("[INPUT] selected {}", click.square);
            }
            ClickOutcome::Deselected | ClickOutcome::Ignored => {}
        }
    }
}
