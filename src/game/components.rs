//! Components for in-flight move animation

use bevy::prelude::*;

/// Attached to a temporary glyph gliding from source to destination
#[derive(Component, Debug)]
pub struct MoveAnimation {
    pub from: Vec3,
    pub to: Vec3,
    pub timer: Timer,
}

impl MoveAnimation {
    pub fn new(from: Vec3, to: Vec3, seconds: f32) -> Self {
        Self {
            from,
            to,
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }
}

/// Marker for the animation glyph entity so cleanup can find it
#[derive(Component, Debug)]
pub struct AnimatingGlyph;
