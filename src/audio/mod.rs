//! Audio domain: fire-and-forget sound cue dispatch.
//!
//! Gameplay systems only name a cue; playback, clip lengths, and missing
//! assets are this module's concern and never surface back.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use std::collections::HashMap;

/// Request to play a named cue once.
#[derive(Debug)]
pub struct PlaySoundEvent {
    pub name: String,
}

impl PlaySoundEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Message for PlaySoundEvent {}

/// Cue name to clip handle, keyed lowercase.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    clips: HashMap<String, Handle<AudioSource>>,
}

impl SoundBank {
    pub fn get(&self, name: &str) -> Option<&Handle<AudioSource>> {
        self.clips.get(&name.to_ascii_lowercase())
    }
}

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySoundEvent>()
            .add_systems(Startup, setup_sound_bank)
            .add_systems(Update, play_sound_cues);
    }
}

fn setup_sound_bank(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut clips = HashMap::new();
    for name in ["jump", "die", "level_finished"] {
        clips.insert(
            name.to_string(),
            asset_server.load(format!("audio/{name}.ogg")),
        );
    }

    commands.insert_resource(SoundBank { clips });
}

/// Spawn a one-shot audio player per cue; the entity despawns itself
/// when playback finishes.
fn play_sound_cues(
    mut commands: Commands,
    bank: Res<SoundBank>,
    mut cue_events: MessageReader<PlaySoundEvent>,
) {
    for event in cue_events.read() {
        match bank.get(&event.name) {
            Some(handle) => {
                commands.spawn((AudioPlayer(handle.clone()), PlaybackSettings::DESPAWN));
            }
            None => warn!("Unknown sound cue '{}'", event.name),
        }
    }
}
