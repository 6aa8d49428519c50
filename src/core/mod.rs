//! Core domain: app flow states and plugin wiring.

mod state;

pub use state::GameState;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>();
    }
}
