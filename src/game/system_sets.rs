//! System execution ordering
//!
//! The four sets run chained every frame. Input produces messages, Validation
//! turns them into state changes, Execution advances the computer turn and
//! derived state, Visual redraws. Chaining guarantees a click is reflected on
//! screen in the same frame it happened.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSystems {
    /// Mouse/keyboard capture and message emission
    Input,
    /// Click resolution and action handling
    Validation,
    /// Computer turn phases and status derivation
    Execution,
    /// Board redraw, tints, animation, overlays
    Visual,
}
