//! Locomotion domain: jump resolution, horizontal motion, and facing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::PlaySoundEvent;
use crate::locomotion::components::{AnimationParams, CharacterState, Facing, Player};
use crate::locomotion::{LocomotionInput, LocomotionTuning};

/// Resolve one jump press through the priority chain. At most one jump
/// per input edge; holding the key does nothing.
pub(crate) fn resolve_jump(
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut player_query: Query<(&mut CharacterState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }

    for (mut state, mut velocity) in &mut player_query {
        if let Some(kind) = state.locomotion.try_jump() {
            velocity.y += tuning.jump_impulse();
            sounds.write(PlaySoundEvent::new("jump"));
            debug!(
                "Jump ({:?}): phase now {:?}, extra jumps {}",
                kind,
                state.locomotion.phase(),
                state.locomotion.extra_jumps()
            );
        }
    }
}

/// Ramp horizontal velocity toward `axis * top_speed`, bounded by
/// `accel * dt` per step. Vertical velocity belongs to the integrator.
pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut player_query: Query<(&mut LinearVelocity, &mut AnimationParams), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut velocity, mut anim) in &mut player_query {
        let target = input.axis * tuning.top_speed;
        velocity.x = move_toward(velocity.x, target, tuning.accel * dt);
        anim.speed = velocity.x.abs();
    }
}

/// Linear ramp toward `target`, clamped so one step never overshoots.
pub(crate) fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    if current < target {
        (current + max_delta).min(target)
    } else {
        (current - max_delta).max(target)
    }
}

/// Facing follows the sign of the axis; zero input leaves it unchanged.
pub(crate) fn update_facing(
    input: Res<LocomotionInput>,
    mut player_query: Query<&mut Facing, With<Player>>,
) {
    for mut facing in &mut player_query {
        if input.axis < 0.0 {
            facing.set_if_neq(Facing::Left);
        } else if input.axis > 0.0 {
            facing.set_if_neq(Facing::Right);
        }
    }
}

pub(crate) fn apply_facing(
    mut player_query: Query<(&Facing, &mut Sprite), (With<Player>, Changed<Facing>)>,
) {
    for (facing, mut sprite) in &mut player_query {
        // Character art faces left at rest
        sprite.flip_x = *facing == Facing::Right;
    }
}
