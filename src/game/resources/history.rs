//! Move history and redo stack resources
//!
//! [`MoveLog`] is the append-only display record of every applied move (SAN
//! included). [`RedoStack`] holds moves popped by undo, LIFO. Any fresh move
//! application clears the redo stack: history is linear, there is no
//! branching redo after a new move.

use crate::rules::PlayedMove;
use bevy::prelude::*;
use shakmaty::{Role, Square};

/// Resource storing the complete move record for the current game
#[derive(Resource, Debug, Default)]
pub struct MoveLog {
    /// Chronological list of all moves made in the game
    pub moves: Vec<PlayedMove>,
}

impl MoveLog {
    pub fn push(&mut self, played: PlayedMove) {
        self.moves.push(played);
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.moves.last()
    }

    /// Move pairs for display: (move number, white SAN, optional black SAN)
    pub fn move_pairs(&self) -> Vec<(usize, String, Option<String>)> {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, chunk)| {
                let white = chunk.first().map(|m| m.san.clone()).unwrap_or_default();
                let black = chunk.get(1).map(|m| m.san.clone());
                (i + 1, white, black)
            })
            .collect()
    }
}

/// One redo entry: the coordinates needed to replay an undone move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedoEntry {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

/// LIFO stack of undone moves
#[derive(Resource, Debug, Default)]
pub struct RedoStack {
    entries: Vec<RedoEntry>,
}

impl RedoStack {
    pub fn push(&mut self, entry: RedoEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<RedoEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(san: &str) -> PlayedMove {
        PlayedMove {
            from: Square::E2,
            to: Square::E4,
            promotion: None,
            capture: false,
            san: san.to_string(),
        }
    }

    #[test]
    fn test_move_pairs_groups_by_two() {
        let mut log = MoveLog::default();
        log.push(played("e4"));
        log.push(played("e5"));
        log.push(played("Nf3"));

        let pairs = log.move_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (1, "e4".to_string(), Some("e5".to_string())));
        assert_eq!(pairs[1], (2, "Nf3".to_string(), None));
    }

    #[test]
    fn test_redo_stack_is_lifo() {
        let mut redo = RedoStack::default();
        let first = RedoEntry {
            from: Square::E2,
            to: Square::E4,
            promotion: None,
        };
        let second = RedoEntry {
            from: Square::D2,
            to: Square::D4,
            promotion: None,
        };
        redo.push(first);
        redo.push(second);

        assert_eq!(redo.pop(), Some(second));
        assert_eq!(redo.pop(), Some(first));
        assert_eq!(redo.pop(), None);
    }
}
