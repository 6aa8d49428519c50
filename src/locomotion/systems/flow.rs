//! Locomotion domain: fall-death and level-completion triggers.
//!
//! Both checks run last in the per-step chain, after contact and motion
//! have settled, every step regardless of contact state.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::PlaySoundEvent;
use crate::levels::{AdvanceLevelEvent, LevelAnchors};
use crate::locomotion::components::{CharacterState, Player};
use crate::locomotion::LocomotionTuning;

/// Falling below the death threshold kills: cue, zero velocity, respawn.
pub(crate) fn check_fall_death(
    tuning: Res<LocomotionTuning>,
    anchors: Res<LevelAnchors>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut player_query: Query<
        (&mut Transform, &mut LinearVelocity, &mut CharacterState),
        With<Player>,
    >,
) {
    for (mut transform, mut velocity, mut state) in &mut player_query {
        if transform.translation.y < tuning.death_height {
            sounds.write(PlaySoundEvent::new("die"));
            velocity.0 = Vec2::ZERO;
            respawn(&mut transform, &mut state, anchors.spawn);
            info!(
                "Fell below {:.0}, respawning at {:?}",
                tuning.death_height, anchors.spawn
            );
        }
    }
}

/// Crossing the end anchor finishes the level exactly once: the latch
/// holds until the next respawn clears it, so repeated position checks
/// past the anchor stay no-ops.
pub(crate) fn check_level_complete(
    anchors: Res<LevelAnchors>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut advance_events: MessageWriter<AdvanceLevelEvent>,
    mut player_query: Query<(&Transform, &mut CharacterState), With<Player>>,
) {
    for (transform, mut state) in &mut player_query {
        if transform.translation.x - anchors.end.x > 0.0 && !state.level_finished {
            state.level_finished = true;
            sounds.write(PlaySoundEvent::new("level_finished"));
            advance_events.write(AdvanceLevelEvent);
            info!(
                "Level endpoint reached at x = {:.1}",
                transform.translation.x
            );
        }
    }
}

/// Move the character to the spawn anchor and release the completion
/// latch. Contact flags and the jump budget are left as they are; the
/// next contact events settle them.
pub(crate) fn respawn(transform: &mut Transform, state: &mut CharacterState, spawn: Vec2) {
    state.level_finished = false;
    transform.translation.x = spawn.x;
    transform.translation.y = spawn.y;
}
