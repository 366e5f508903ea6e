//! egui panels: side panel and promotion prompt

pub mod promotion_ui;
pub mod side_panel;
pub mod styles;

pub use promotion_ui::promotion_ui_system;
pub use side_panel::side_panel_ui;
