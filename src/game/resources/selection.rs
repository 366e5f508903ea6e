//! Selection resource for tracking the selected square

use bevy::prelude::*;
use shakmaty::Square;

/// Resource storing the currently selected square and its legal destinations
///
/// `targets` is recomputed from the rules engine on every selection change;
/// it is non-empty only when a piece of the side-to-move was clicked.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<Square>,
    pub targets: Vec<Square>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_target(&self, square: Square) -> bool {
        self.targets.contains(&square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_everything() {
        let mut selection = Selection {
            selected: Some(Square::E2),
            targets: vec![Square::E3, Square::E4],
        };
        assert!(selection.is_selected());
        assert!(selection.is_target(Square::E4));

        selection.clear();
        assert!(!selection.is_selected());
        assert!(selection.targets.is_empty());
    }
}
