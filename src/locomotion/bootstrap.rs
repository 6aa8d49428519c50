//! Locomotion domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::fx::LanternFlicker;
use crate::levels::LevelAnchors;
use crate::locomotion::components::{
    AnimationParams, CharacterState, Facing, GameLayer, Player, TouchingSurfaces,
};
use crate::locomotion::probe::GroundProbe;
use crate::locomotion::LocomotionTuning;

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the character at the current level's spawn anchor. Runs on
/// entering play; respawns later mutate the same entity in place.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    anchors: Res<LevelAnchors>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn = anchors.spawn;
    info!("Spawning player at {:?}", spawn);

    commands
        .spawn((
            // Identity & state
            (
                Player,
                CharacterState::spawned(&tuning.jump_rules()),
                TouchingSurfaces::default(),
                GroundProbe::default(),
                Facing::default(),
                AnimationParams::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.88, 0.82),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(spawn.x, spawn.y, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .with_children(|parent| {
            // Lantern glow, flickered by the fx systems
            parent.spawn((
                LanternFlicker::default(),
                Sprite {
                    color: Color::srgba(1.0, 0.85, 0.5, 0.5),
                    custom_size: Some(Vec2::splat(140.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -1.0),
            ));
        });
}
