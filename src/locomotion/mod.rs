//! Locomotion domain: contact state, jump resolution, and motion.
//!
//! The decision logic lives in [`state`] as a pure machine; the systems
//! here feed it collision messages, the ground-probe overlap, and input
//! edges, then apply the results to the physics velocity. Integration
//! itself belongs to avian.

mod bootstrap;
mod components;
mod probe;
mod resources;
pub mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::PLAYER_SIZE;
pub use components::{
    AnimationParams, CharacterState, Facing, GameLayer, Player, Surface, TouchingSurfaces,
};
pub use probe::{GroundProbe, PROBE_SIZE};
pub use resources::{JUMP_IMPULSE_SCALE, LocomotionInput, LocomotionTuning};
pub use state::{JumpKind, JumpPhase, JumpRules, LocomotionState, SurfaceTag};

pub(crate) use systems::flow::respawn;
pub(crate) use systems::locomotion::move_toward;

use bevy::prelude::*;

use crate::core::GameState;
use crate::locomotion::bootstrap::spawn_player;
use crate::locomotion::probe::refresh_probe;
use crate::locomotion::systems::{
    apply_facing, apply_horizontal_movement, apply_surface_support, check_fall_death,
    check_level_complete, read_input, resolve_jump, track_surface_contacts, update_facing,
};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                // Contact flags must be settled before jump resolution
                // reads them; completion and death are checked last.
                (
                    read_input,
                    refresh_probe,
                    track_surface_contacts,
                    apply_surface_support,
                    resolve_jump,
                    apply_horizontal_movement,
                    update_facing,
                    apply_facing,
                    check_fall_death,
                    check_level_complete,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            probe::draw_probe_gizmos.run_if(in_state(GameState::Playing)),
        );
    }
}
