//! Levels domain: content loading at boot and the level-advance flow.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;
use crate::levels::data::LevelDef;
use crate::levels::events::AdvanceLevelEvent;
use crate::levels::loader;
use crate::levels::registry::{LevelAnchors, LevelRegistry};
use crate::levels::spawn::{spawn_level_surfaces, LevelSurface};
use crate::locomotion::{respawn, CharacterState, LocomotionTuning, Player, TouchingSurfaces};

/// Load levels and tuning from `assets/data`, then enter play. Load
/// failures fall back to built-in data and are logged, never fatal.
pub(crate) fn load_content(
    mut commands: Commands,
    mut tuning: ResMut<LocomotionTuning>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let base_path = Path::new("assets/data");

    let levels = match loader::load_levels(base_path) {
        Ok(levels) if !levels.is_empty() => levels,
        Ok(_) => {
            error!("levels.ron contains no levels, using the built-in fallback");
            vec![LevelDef::fallback()]
        }
        Err(e) => {
            error!("{}, using the built-in fallback level", e);
            vec![LevelDef::fallback()]
        }
    };

    match loader::load_tuning(base_path) {
        Ok(loaded) => *tuning = loaded,
        Err(e) => warn!("{}, keeping default locomotion tuning", e),
    }

    let registry = LevelRegistry::new(levels);
    let anchors = registry
        .current_def()
        .map(LevelAnchors::from_def)
        .unwrap_or_default();

    info!("Loaded {} level(s), entering play", registry.levels.len());

    commands.insert_resource(anchors);
    commands.insert_resource(registry);
    next_state.set(GameState::Playing);
}

/// Swap the current level for the next one: despawn the old geometry,
/// spawn the new, refresh the anchors, and respawn the character at the
/// new spawn anchor. Requests past the last level are logged and
/// dropped; the current level stays in place.
pub(crate) fn advance_level(
    mut advance_events: MessageReader<AdvanceLevelEvent>,
    mut commands: Commands,
    mut registry: ResMut<LevelRegistry>,
    mut anchors: ResMut<LevelAnchors>,
    surface_query: Query<Entity, With<LevelSurface>>,
    mut player_query: Query<
        (&mut Transform, &mut CharacterState, &mut TouchingSurfaces),
        With<Player>,
    >,
) {
    for _ in advance_events.read() {
        if !registry.advance() {
            error!("A non-existing level has been queued for loading");
            continue;
        }

        let Some(def) = registry.current_def() else {
            continue;
        };

        for entity in &surface_query {
            commands.entity(entity).despawn();
        }
        spawn_level_surfaces(&mut commands, def);
        *anchors = LevelAnchors::from_def(def);

        for (mut transform, mut state, mut touching) in &mut player_query {
            // The old level's colliders are gone; no end messages will
            // come for them
            touching.clear();
            respawn(&mut transform, &mut state, anchors.spawn);
        }

        info!("Advanced to level '{}'", def.id);
    }
}
