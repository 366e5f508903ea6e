//! Game side panel
//!
//! Status line, action buttons, view toggles, settings and the move list.
//! Buttons only emit messages; the handlers in `game::systems::actions` do
//! the actual work, so the panel and the keyboard shortcuts stay in sync.

use crate::core::GameSettings;
use crate::game::events::{
    FlipBoardRequested, NewGameRequested, RedoRequested, ThreatOverlayToggled, UndoRequested,
};
use crate::game::resources::{AiTurn, BoardView, GameOverState, MoveLog, Players, RedoStack};
use crate::rules::RulesEngine;
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use shakmaty::Color as SideColor;

#[allow(clippy::too_many_arguments)]
pub fn side_panel_ui(
    mut contexts: EguiContexts,
    engine: Res<RulesEngine>,
    players: Res<Players>,
    log: Res<MoveLog>,
    redo: Res<RedoStack>,
    ai: Res<AiTurn>,
    status: Res<GameOverState>,
    view: Res<BoardView>,
    mut settings: ResMut<GameSettings>,
    mut new_game: MessageWriter<NewGameRequested>,
    mut undo: MessageWriter<UndoRequested>,
    mut redo_msg: MessageWriter<RedoRequested>,
    mut flip: MessageWriter<FlipBoardRequested>,
    mut threat: MessageWriter<ThreatOverlayToggled>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("game_side_panel")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.add_space(10.0);

            // === STATUS ===
            if status.is_game_over() {
                ui.label(
                    egui::RichText::new(status.message())
                        .size(16.0)
                        .color(UiColors::ACCENT_GOLD)
                        .strong(),
                );
            } else {
                let turn = engine.turn();
                let who = if players.is_human_turn(turn) {
                    "(you)"
                } else {
                    "(computer)"
                };
                let side = match turn {
                    SideColor::White => "White",
                    SideColor::Black => "Black",
                };
                ui.label(
                    egui::RichText::new(format!("{} to move {}", side, who))
                        .size(16.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                if engine.is_check() {
                    ui.label(
                        egui::RichText::new("CHECK!")
                            .size(14.0)
                            .color(UiColors::DANGER)
                            .strong(),
                    );
                }
                if ai.is_busy() {
                    let dots = (ui.input(|i| i.time) * 2.0) as usize % 4;
                    ui.label(
                        egui::RichText::new(format!("Thinking{}", ".".repeat(dots)))
                            .size(13.0)
                            .color(UiColors::INFO),
                    );
                }
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            // === ACTIONS ===
            if ui.button("New Game").clicked() {
                new_game.write(NewGameRequested);
            }
            ui.horizontal(|ui| {
                let can_edit = !ai.is_busy();
                if ui
                    .add_enabled(can_edit && !log.is_empty(), egui::Button::new("Undo"))
                    .clicked()
                {
                    undo.write(UndoRequested);
                }
                if ui
                    .add_enabled(can_edit && !redo.is_empty(), egui::Button::new("Redo"))
                    .clicked()
                {
                    redo_msg.write(RedoRequested);
                }
            });
            if ui.button("Flip board").clicked() {
                flip.write(FlipBoardRequested);
            }

            let mut overlay = view.threat_overlay;
            ui.checkbox(&mut overlay, "Show threats");
            if overlay != view.threat_overlay {
                threat.write(ThreatOverlayToggled);
            }

            ui.add_space(10.0);
            ui.separator();

            // === SETTINGS ===
            ui.collapsing("Settings", |ui| {
                let mut think = settings.ai_think_seconds;
                ui.add(
                    egui::Slider::new(&mut think, 0.1..=3.0)
                        .text("think time (s)")
                        .fixed_decimals(2),
                );
                if (think - settings.ai_think_seconds).abs() > f32::EPSILON {
                    settings.ai_think_seconds = think;
                }

                let mut anim = settings.move_anim_seconds;
                ui.add(
                    egui::Slider::new(&mut anim, 0.05..=1.0)
                        .text("animation (s)")
                        .fixed_decimals(2),
                );
                if (anim - settings.move_anim_seconds).abs() > f32::EPSILON {
                    settings.move_anim_seconds = anim;
                }
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            // === MOVE LIST ===
            ui.label(
                egui::RichText::new("Moves")
                    .size(14.0)
                    .color(UiColors::TEXT_SECONDARY)
                    .strong(),
            );
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (number, white_san, black_san) in log.move_pairs() {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("{}.", number))
                                    .color(UiColors::TEXT_SECONDARY)
                                    .monospace(),
                            );
                            ui.label(
                                egui::RichText::new(white_san)
                                    .color(UiColors::TEXT_PRIMARY)
                                    .monospace(),
                            );
                            if let Some(black) = black_san {
                                ui.label(
                                    egui::RichText::new(black)
                                        .color(UiColors::TEXT_PRIMARY)
                                        .monospace(),
                                );
                            }
                        });
                    }
                });
        });
}
