//! Glyph glide animation

use bevy::prelude::*;

use crate::game::components::MoveAnimation;

/// Advance every in-flight glyph along its path and despawn it on arrival
pub fn animate_glyphs(
    mut commands: Commands,
    time: Res<Time>,
    mut glyphs: Query<(Entity, &mut MoveAnimation, &mut Transform)>,
) {
    for (entity, mut anim, mut transform) in &mut glyphs {
        anim.timer.tick(time.delta());
        let t = anim.timer.fraction();
        // smoothstep for gentle start and stop
        let eased = t * t * (3.0 - 2.0 * t);
        transform.translation = anim.from.lerp(anim.to, eased);
        if anim.timer.is_finished() {
            commands.entity(entity).despawn();
        }
    }
}
