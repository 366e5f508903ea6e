//! Shared egui color palette

use bevy_egui::egui::Color32;

/// UI color constants used across the panels
pub struct UiColors;

impl UiColors {
    pub const BG_DARK: Color32 = Color32::from_rgb(18, 18, 24);
    pub const BG_MID: Color32 = Color32::from_rgb(32, 32, 42);
    pub const BG_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 72);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 240);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);

    pub const ACCENT_GOLD: Color32 = Color32::from_rgb(212, 175, 55);
    pub const DANGER: Color32 = Color32::from_rgb(220, 60, 60);
    pub const INFO: Color32 = Color32::from_rgb(100, 160, 220);
}
