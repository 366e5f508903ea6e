//! Board rendering plugin
//!
//! Owns the camera, the 64 tiles and the piece glyphs. Glyph state is never
//! patched incrementally: whenever the rules engine or the view flags change
//! (or a redraw is forced), every glyph is despawned and respawned from the
//! engine's current position. Slow and correct beats fast and desynced for
//! a 32-entity board.

pub mod board;

use bevy::prelude::*;
use shakmaty::{Position, Square};

use crate::game::resources::{AiPhase, AiTurn, BoardView, Selection};
use crate::game::system_sets::GameSystems;
use crate::rules::RulesEngine;
use self::board::{
    base_tile_color, piece_glyph, square_to_world, BoardTile, PieceGlyph, CAPTURE_TINT,
    CHECK_TINT, GLYPH_Z, SELECTED_TINT, TARGET_TINT, TILE_SIZE, TILE_Z,
};

/// Resource set when the renderer must rebuild glyphs without an engine change
#[derive(Resource, Debug, Default)]
pub struct RedrawRequest {
    pub forced: bool,
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RedrawRequest>()
            .add_systems(Startup, (setup_camera, spawn_tiles))
            .add_systems(
                Update,
                (
                    layout_tiles,
                    sync_piece_glyphs,
                    retint_tiles,
                    verify_board_consistency,
                )
                    .chain()
                    .in_set(GameSystems::Visual),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_tiles(mut commands: Commands, view: Res<BoardView>) {
    for idx in 0..64u32 {
        let square = Square::new(idx);
        let pos = square_to_world(square, view.flipped);
        commands.spawn((
            BoardTile { square },
            Sprite::from_color(base_tile_color(square), Vec2::splat(TILE_SIZE)),
            Transform::from_translation(pos.extend(TILE_Z)),
        ));
    }
    info!("[BOARD] spawned 64 tiles");
}

/// Reposition tiles when the orientation flips
fn layout_tiles(view: Res<BoardView>, mut tiles: Query<(&BoardTile, &mut Transform)>) {
    if !view.is_changed() {
        return;
    }
    for (tile, mut transform) in &mut tiles {
        let pos = square_to_world(tile.square, view.flipped);
        transform.translation = pos.extend(TILE_Z);
    }
}

/// Full glyph rebuild from the engine position
fn sync_piece_glyphs(
    mut commands: Commands,
    engine: Res<RulesEngine>,
    view: Res<BoardView>,
    ai: Res<AiTurn>,
    mut redraw: ResMut<RedrawRequest>,
    glyphs: Query<Entity, With<PieceGlyph>>,
) {
    if !engine.is_changed() && !view.is_changed() && !redraw.forced {
        return;
    }
    redraw.forced = false;

    for entity in &glyphs {
        commands.entity(entity).despawn();
    }

    // while a computer move is gliding, its source glyph stays hidden so the
    // piece is not drawn twice
    let animating_from = match ai.phase {
        AiPhase::Animating { mv, .. } => Some(mv.from),
        _ => None,
    };

    for idx in 0..64u32 {
        let square = Square::new(idx);
        let Some(piece) = engine.piece_at(square) else {
            continue;
        };
        let (text, tint) = piece_glyph(piece);
        let pos = square_to_world(square, view.flipped);
        let visibility = if animating_from == Some(square) {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        commands.spawn((
            PieceGlyph { square, piece },
            Text2d::new(text),
            TextFont {
                font_size: TILE_SIZE * 0.62,
                ..default()
            },
            TextColor(tint),
            Transform::from_translation(pos.extend(GLYPH_Z)),
            visibility,
        ));
    }
}

/// Per-frame tile tinting for selection, targets and check
fn retint_tiles(
    engine: Res<RulesEngine>,
    selection: Res<Selection>,
    mut tiles: Query<(&BoardTile, &mut Sprite)>,
) {
    let checked_king = if engine.is_check() {
        engine.position().board().king_of(engine.turn())
    } else {
        None
    };

    for (tile, mut sprite) in &mut tiles {
        sprite.color = if selection.selected == Some(tile.square) {
            SELECTED_TINT
        } else if selection.is_target(tile.square) {
            if engine.piece_at(tile.square).is_some() {
                CAPTURE_TINT
            } else {
                TARGET_TINT
            }
        } else if checked_king == Some(tile.square) {
            CHECK_TINT
        } else {
            base_tile_color(tile.square)
        };
    }
}

/// Detect glyphs that disagree with the engine position and force a rebuild
///
/// Skipped while the computer turn is in flight because the animation
/// deliberately hides the source glyph.
fn verify_board_consistency(
    engine: Res<RulesEngine>,
    ai: Res<AiTurn>,
    mut redraw: ResMut<RedrawRequest>,
    glyphs: Query<&PieceGlyph>,
) {
    if ai.is_busy() || redraw.forced {
        return;
    }

    let mut drawn = 0usize;
    for glyph in &glyphs {
        if engine.piece_at(glyph.square) != Some(glyph.piece) {
            warn!(
                "[BOARD] glyph desync at {}: forcing redraw",
                glyph.square
            );
            redraw.forced = true;
            return;
        }
        drawn += 1;
    }

    let expected = (0..64u32)
        .filter(|&idx| engine.piece_at(Square::new(idx)).is_some())
        .count();
    if drawn != expected {
        warn!(
            "[BOARD] glyph count {} != engine count {}: forcing redraw",
            drawn, expected
        );
        redraw.forced = true;
    }
}
