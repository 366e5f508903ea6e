//! Pawn promotion resource for tracking pending promotions
//!
//! When a human move would promote a pawn, this resource stores the pending
//! move and the UI shows a selection dialog. Board input is ignored until the
//! player chooses; dismissing the dialog defaults to queen.

use bevy::prelude::*;
use shakmaty::{Color, Role, Square};

/// Resource tracking a pending pawn promotion
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PendingPromotion {
    pub from: Option<Square>,
    pub to: Option<Square>,
    pub color: Option<Color>,
    is_pending: bool,
}

impl PendingPromotion {
    /// Begin a promotion prompt for the given pending move
    pub fn start(&mut self, from: Square, to: Square, color: Color) {
        self.from = Some(from);
        self.to = Some(to);
        self.color = Some(color);
        self.is_pending = true;
    }

    /// Clear the pending promotion (after the player selects or dismisses)
    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
        self.color = None;
        self.is_pending = false;
    }

    pub fn is_active(&self) -> bool {
        self.is_pending
    }
}

/// Message sent when the player selects a promotion piece
#[derive(Message, Debug, Clone, Copy)]
pub struct PromotionSelected {
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_records_the_pending_move_and_side() {
        let mut pending = PendingPromotion::default();
        assert!(!pending.is_active());

        pending.start(Square::E7, Square::E8, Color::White);
        assert!(pending.is_active());
        assert_eq!(pending.from, Some(Square::E7));
        assert_eq!(pending.to, Some(Square::E8));
        assert_eq!(pending.color, Some(Color::White));

        pending.clear();
        assert!(!pending.is_active());
        assert_eq!(pending.color, None);
    }
}
