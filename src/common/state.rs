//! Global state machine.

use bevy::prelude::*;

/// Everything gameplay-related is scoped to `InGame` via `DespawnOnExit`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
