//! Main game plugin
//!
//! Registers every resource and message, configures the chained system sets
//! and wires up the Update and egui schedules. Adding [`GamePlugin`] plus
//! [`crate::rendering::BoardPlugin`] to an `App` is the whole game.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::core::{load_settings_system, save_settings_system, GameSettings};
use crate::game::events::{
    FlipBoardRequested, NewGameRequested, RedoRequested, SquareClicked, ThreatOverlayToggled,
    UndoRequested,
};
use crate::game::resources::{
    AiTurn, BoardView, GameOverState, MoveLog, PendingPromotion, Players, PromotionSelected,
    RedoStack, Selection,
};
use crate::game::system_sets::GameSystems;
use crate::game::systems::{actions, ai, animation, input, status, threat};
use crate::rules::RulesEngine;
use crate::ui::{promotion_ui_system, side_panel_ui};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RulesEngine>()
            .init_resource::<Selection>()
            .init_resource::<MoveLog>()
            .init_resource::<RedoStack>()
            .init_resource::<Players>()
            .init_resource::<AiTurn>()
            .init_resource::<BoardView>()
            .init_resource::<PendingPromotion>()
            .init_resource::<GameOverState>()
            .add_message::<SquareClicked>()
            .add_message::<UndoRequested>()
            .add_message::<RedoRequested>()
            .add_message::<NewGameRequested>()
            .add_message::<FlipBoardRequested>()
            .add_message::<ThreatOverlayToggled>()
            .add_message::<PromotionSelected>()
            .configure_sets(
                Update,
                (
                    GameSystems::Input,
                    GameSystems::Validation,
                    GameSystems::Execution,
                    GameSystems::Visual,
                )
                    .chain(),
            )
            .add_systems(Startup, (load_settings_system, begin_session).chain())
            .add_systems(
                Update,
                (input::board_click_system, input::keyboard_shortcuts)
                    .in_set(GameSystems::Input),
            )
            .add_systems(
                Update,
                (
                    input::handle_square_clicked,
                    actions::handle_promotion_selected,
                    actions::handle_undo_requested,
                    actions::handle_redo_requested,
                    actions::handle_new_game_requested,
                    actions::handle_flip_board,
                    actions::handle_threat_overlay_toggled,
                )
                    .chain()
                    .in_set(GameSystems::Validation),
            )
            .add_systems(
                Update,
                (
                    ai::ai_commit_system,
                    ai::ai_turn_system,
                    status::update_game_status,
                    save_settings_system,
                )
                    .chain()
                    .in_set(GameSystems::Execution),
            )
            .add_systems(
                Update,
                (animation::animate_glyphs, threat::sync_threat_markers)
                    .in_set(GameSystems::Visual),
            )
            .add_systems(EguiPrimaryContextPass, (side_panel_ui, promotion_ui_system));
    }
}

/// Assign sides at random and apply the persisted view defaults
fn begin_session(
    mut players: ResMut<Players>,
    mut view: ResMut<BoardView>,
    settings: Res<GameSettings>,
) {
    let mut rng = rand::rng();
    players.randomize(&mut rng);
    view.threat_overlay = settings.threat_overlay_default;
    info!("[GAME] session started, human plays {:?}", players.human);
}
