//! Game module: interaction model, resources, systems and the plugin

pub mod components;
pub mod controller;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
