//! Threat overlay rendering
//!
//! One thin rotated sprite per opponent threat, stretched from attacker to
//! target. Rebuilt from scratch whenever the position or the view flags
//! change.

use bevy::prelude::*;

use crate::game::resources::BoardView;
use crate::rendering::board::{
    square_to_world, ThreatMarker, THREAT_CAPTURE_COLOR, THREAT_CHECK_COLOR, THREAT_Z,
};
use crate::rules::{RulesEngine, ThreatKind};

pub fn sync_threat_markers(
    mut commands: Commands,
    engine: Res<RulesEngine>,
    view: Res<BoardView>,
    markers: Query<Entity, With<ThreatMarker>>,
) {
    if !engine.is_changed() && !view.is_changed() {
        return;
    }

    for entity in &markers {
        commands.entity(entity).despawn();
    }
    if !view.threat_overlay {
        return;
    }

    let threats = engine.opponent_threats();
    if !threats.is_empty() {
        debug!("[BOARD] drawing {} threat markers", threats.len());
    }
    for threat in threats {
        let from = square_to_world(threat.from, view.flipped);
        let to = square_to_world(threat.to, view.flipped);
        let delta = to - from;
        let length = delta.length();
        if length <= f32::EPSILON {
            continue;
        }
        let angle = delta.y.atan2(delta.x);
        let midpoint = (from + to) / 2.0;
        let color = match threat.kind {
            ThreatKind::Capture => THREAT_CAPTURE_COLOR,
            ThreatKind::Check => THREAT_CHECK_COLOR,
        };
        commands.spawn((
            ThreatMarker,
            Sprite::from_color(color, Vec2::new(length, 6.0)),
            Transform {
                translation: midpoint.extend(THREAT_Z),
                rotation: Quat::from_rotation_z(angle),
                ..default()
            },
        ));
    }
}
