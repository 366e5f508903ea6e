use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use clickchess::game::GamePlugin;
use clickchess::rendering::BoardPlugin;

const WINDOW_WIDTH: u32 = 960;
const WINDOW_HEIGHT: u32 = 720;

fn main() {
    let window = Window {
        title: "ClickChess".into(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };
    let primary_window = Some(window);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..default()
        })
        .add_plugins(GamePlugin)
        .add_plugins(BoardPlugin)
        .run();
}
