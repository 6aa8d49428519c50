//! Locomotion domain: system modules for the per-step update.

pub(crate) mod contacts;
pub(crate) mod flow;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use contacts::{apply_surface_support, track_surface_contacts};
pub(crate) use flow::{check_fall_death, check_level_complete};
pub(crate) use input::read_input;
pub(crate) use locomotion::{apply_facing, apply_horizontal_movement, resolve_jump, update_facing};
