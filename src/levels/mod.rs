//! Levels domain: level data, loading, and progression.

mod data;
mod events;
mod loader;
mod registry;
mod spawn;
mod systems;

pub use data::{DataFile, LevelDef, SurfaceDef};
pub use events::AdvanceLevelEvent;
pub use loader::LevelLoadError;
pub use registry::{LevelAnchors, LevelRegistry};
pub use spawn::LevelSurface;

use bevy::prelude::*;

use crate::core::GameState;
use crate::levels::spawn::spawn_current_level;
use crate::levels::systems::{advance_level, load_content};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AdvanceLevelEvent>()
            .add_systems(Startup, load_content)
            .add_systems(OnEnter(GameState::Playing), spawn_current_level)
            .add_systems(
                Update,
                advance_level.run_if(in_state(GameState::Playing)),
            );
    }
}
