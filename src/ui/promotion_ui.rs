//! Pawn Promotion UI
//!
//! Modal dialog shown when a human pawn reaches the last rank. Board input
//! stays frozen until the player picks a piece; Escape or Enter dismisses
//! the dialog with the queen default.

use crate::game::resources::{PendingPromotion, PromotionSelected};
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use shakmaty::{Color as SideColor, Role};

/// System to display the pawn promotion selection dialog
pub fn promotion_ui_system(
    mut contexts: EguiContexts,
    pending_promotion: Res<PendingPromotion>,
    keys: Res<ButtonInput<KeyCode>>,
    mut promotion_messages: MessageWriter<PromotionSelected>,
) {
    if !pending_promotion.is_active() {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::Escape) || keys.just_pressed(KeyCode::Enter) {
        promotion_messages.write(PromotionSelected { role: Role::Queen });
        return;
    }

    // modal overlay behind the dialog
    egui::Area::new(egui::Id::new("promotion_overlay"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter()
                .rect_filled(screen_rect, 0.0, UiColors::BG_OVERLAY);
        });

    egui::Window::new("Promote Pawn")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(12.0)
                .inner_margin(20.0)
                .stroke(egui::Stroke::new(2.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Choose Promotion Piece")
                        .size(20.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(15.0);

                ui.horizontal(|ui| {
                    let pieces = match pending_promotion.color.unwrap_or(SideColor::White) {
                        SideColor::White => [
                            (Role::Queen, "♕"),
                            (Role::Rook, "♖"),
                            (Role::Bishop, "♗"),
                            (Role::Knight, "♘"),
                        ],
                        SideColor::Black => [
                            (Role::Queen, "♛"),
                            (Role::Rook, "♜"),
                            (Role::Bishop, "♝"),
                            (Role::Knight, "♞"),
                        ],
                    };

                    for (role, symbol) in pieces {
                        let button = egui::Button::new(
                            egui::RichText::new(symbol)
                                .size(48.0)
                                .color(UiColors::TEXT_PRIMARY),
                        )
                        .min_size(egui::vec2(70.0, 70.0))
                        .fill(UiColors::BG_DARK);

                        if ui.add(button).clicked() {
                            promotion_messages.write(PromotionSelected { role });
                        }
                    }
                });

                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Esc for queen")
                        .size(12.0)
                        .color(UiColors::TEXT_SECONDARY),
                );
            });
        });
}
