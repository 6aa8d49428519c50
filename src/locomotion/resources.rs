//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::state::JumpRules;

/// Fraction of `jump_height` applied to vertical velocity per jump.
pub const JUMP_IMPULSE_SCALE: f32 = 0.1;

/// Numeric tunables supplied at construction, overridable from
/// `assets/data/tuning.ron`.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub top_speed: f32,
    /// Horizontal velocity changes by at most `accel * dt` per step.
    pub accel: f32,
    /// Scaled by [`JUMP_IMPULSE_SCALE`] into the per-jump impulse.
    pub jump_height: f32,
    /// Falling below this y triggers death and respawn.
    pub death_height: f32,
    pub extra_jumps: u8,
    pub wall_jump: bool,
    pub double_jump: bool,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            top_speed: 320.0,
            accel: 2800.0,
            jump_height: 6500.0,
            death_height: -600.0,
            extra_jumps: 1,
            wall_jump: true,
            double_jump: true,
        }
    }
}

impl LocomotionTuning {
    pub fn jump_rules(&self) -> JumpRules {
        JumpRules {
            wall_jump: self.wall_jump,
            double_jump: self.double_jump,
            extra_jumps: self.extra_jumps,
        }
    }

    pub fn jump_impulse(&self) -> f32 {
        self.jump_height * JUMP_IMPULSE_SCALE
    }
}

/// Sampled player intent for the current step.
#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    /// Signed horizontal axis in [-1, 1].
    pub axis: f32,
    /// Discrete jump edge: true only on the frame the key went down.
    pub jump_pressed: bool,
}
