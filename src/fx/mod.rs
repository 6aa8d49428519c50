//! Fx domain: cosmetic presentation effects.
//!
//! Nothing here feeds back into locomotion decisions.

use bevy::color::Alpha;
use bevy::prelude::*;
use rand::Rng;

use crate::core::GameState;
use crate::locomotion::{move_toward, AnimationParams, LocomotionTuning, Player, PLAYER_SIZE};

/// Flickering lantern glow attached to the character. Alpha drifts
/// toward a fresh random target every frame.
#[derive(Component, Debug, Clone)]
pub struct LanternFlicker {
    pub min_intensity: f32,
    pub max_intensity: f32,
    pub flicker_speed: f32,
}

impl Default for LanternFlicker {
    fn default() -> Self {
        Self {
            min_intensity: 0.25,
            max_intensity: 0.75,
            flicker_speed: 5.0,
        }
    }
}

pub struct FxPlugin;

impl Plugin for FxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (flicker_lanterns, stretch_running_sprite).run_if(in_state(GameState::Playing)),
        );
    }
}

fn flicker_lanterns(time: Res<Time>, mut query: Query<(&LanternFlicker, &mut Sprite)>) {
    let mut rng = rand::rng();

    for (flicker, mut sprite) in &mut query {
        let target = rng.random_range(flicker.min_intensity..flicker.max_intensity);
        let alpha = move_toward(
            sprite.color.alpha(),
            target,
            flicker.flicker_speed * time.delta_secs(),
        );
        sprite.color.set_alpha(alpha);
    }
}

/// Subtle run stretch driven by the animation speed parameter. Only the
/// sprite size changes; the collider is untouched.
fn stretch_running_sprite(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&AnimationParams, &mut Sprite), With<Player>>,
) {
    for (anim, mut sprite) in &mut query {
        let stretch = 1.0 + 0.04 * (anim.speed / tuning.top_speed.max(1.0)).min(1.0);
        sprite.custom_size = Some(Vec2::new(
            PLAYER_SIZE.x * stretch,
            PLAYER_SIZE.y * (2.0 - stretch),
        ));
    }
}
