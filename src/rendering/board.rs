//! Board geometry, colors and glyph mapping
//!
//! The board is 64 sprite tiles plus one `Text2d` glyph per piece, all in
//! world space under a single 2D camera. Squares map to world coordinates
//! through [`square_to_world`]; mouse clicks map back through
//! [`world_to_square`]. Both take the orientation flag so a flipped board is
//! purely a coordinate transform.

use bevy::prelude::*;
use shakmaty::{Color as SideColor, Piece, Role, Square};

/// Edge length of one board square in world units
pub const TILE_SIZE: f32 = 80.0;

/// Z layers, back to front
pub const TILE_Z: f32 = 0.0;
pub const THREAT_Z: f32 = 0.5;
pub const GLYPH_Z: f32 = 1.0;
pub const ANIM_Z: f32 = 2.0;

pub const LIGHT_SQUARE: Color = Color::srgb(0.93, 0.93, 0.82);
pub const DARK_SQUARE: Color = Color::srgb(0.46, 0.59, 0.34);
pub const SELECTED_TINT: Color = Color::srgb(0.96, 0.83, 0.18);
pub const TARGET_TINT: Color = Color::srgb(0.55, 0.75, 0.95);
pub const CAPTURE_TINT: Color = Color::srgb(0.91, 0.45, 0.32);
pub const CHECK_TINT: Color = Color::srgb(0.86, 0.20, 0.18);

pub const THREAT_CAPTURE_COLOR: Color = Color::srgba(0.91, 0.30, 0.24, 0.65);
pub const THREAT_CHECK_COLOR: Color = Color::srgba(0.95, 0.61, 0.07, 0.65);

pub const WHITE_PIECE: Color = Color::srgb(0.98, 0.98, 0.96);
pub const BLACK_PIECE: Color = Color::srgb(0.10, 0.10, 0.12);

/// Marker for one of the 64 background tiles
#[derive(Component, Debug)]
pub struct BoardTile {
    pub square: Square,
}

/// Marker for a piece glyph currently on the board
#[derive(Component, Debug)]
pub struct PieceGlyph {
    pub square: Square,
    pub piece: Piece,
}

/// Marker for a threat overlay line
#[derive(Component, Debug)]
pub struct ThreatMarker;

/// World-space center of a square for the given orientation
///
/// With `flipped == false`, a1 sits bottom-left from White's point of view;
/// flipping reverses both axes so the same square lands mirrored through the
/// board center.
pub fn square_to_world(square: Square, flipped: bool) -> Vec2 {
    let mut col = u32::from(square.file()) as i32;
    let mut row = u32::from(square.rank()) as i32;
    if flipped {
        col = 7 - col;
        row = 7 - row;
    }
    Vec2::new(
        (col as f32 - 3.5) * TILE_SIZE,
        (row as f32 - 3.5) * TILE_SIZE,
    )
}

/// Inverse of [`square_to_world`]; `None` for positions off the board
pub fn world_to_square(pos: Vec2, flipped: bool) -> Option<Square> {
    let col = (pos.x / TILE_SIZE + 4.0).floor() as i32;
    let row = (pos.y / TILE_SIZE + 4.0).floor() as i32;
    if !(0..8).contains(&col) || !(0..8).contains(&row) {
        return None;
    }
    let (col, row) = if flipped { (7 - col, 7 - row) } else { (col, row) };
    Some(Square::from_coords(
        shakmaty::File::new(col as u32),
        shakmaty::Rank::new(row as u32),
    ))
}

/// Text and tint for a piece glyph
pub fn piece_glyph(piece: Piece) -> (String, Color) {
    let letter = match piece.role {
        Role::Pawn => "P",
        Role::Knight => "N",
        Role::Bishop => "B",
        Role::Rook => "R",
        Role::Queen => "Q",
        Role::King => "K",
    };
    let tint = match piece.color {
        SideColor::White => WHITE_PIECE,
        SideColor::Black => BLACK_PIECE,
    };
    (letter.to_string(), tint)
}

/// Base checkerboard color of a square
pub fn base_tile_color(square: Square) -> Color {
    if square.is_light() {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}
