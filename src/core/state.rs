//! Core domain: game state definitions for the app flow.

use bevy::prelude::*;

/// Top-level app flow. Content loads during `Boot`; all gameplay systems
/// run in `Playing`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
}
