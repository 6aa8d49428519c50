//! Levels domain: events for the level flow.

use bevy::ecs::message::Message;

/// Fire-and-forget request to load the next level. Emitted by the
/// completion check; failures are logged here and never reach the
/// locomotion core.
#[derive(Debug)]
pub struct AdvanceLevelEvent;

impl Message for AdvanceLevelEvent {}
