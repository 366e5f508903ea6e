//! Side assignment resource
//!
//! Tracks which color the human controls and which the computer controls.
//! The human side is drawn uniformly at random at session start; the computer
//! always takes the complement, so `human != ai` holds at all times.

use bevy::prelude::*;
use rand::Rng;
use shakmaty::Color;

/// Resource holding the human/computer side assignment
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    pub human: Color,
    pub ai: Color,
}

impl Default for Players {
    fn default() -> Self {
        Self {
            human: Color::White,
            ai: Color::Black,
        }
    }
}

impl Players {
    /// Draw a fresh side assignment uniformly at random
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.human = if rng.random_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        self.ai = self.human.other();
    }

    pub fn is_human_turn(&self, turn: Color) -> bool {
        self.human == turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sides_are_always_complementary() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut players = Players::default();
        for _ in 0..100 {
            players.randomize(&mut rng);
            assert_ne!(players.human, players.ai);
            assert_eq!(players.ai, players.human.other());
        }
    }
}
