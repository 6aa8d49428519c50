//! Levels domain: spawning level geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::levels::data::LevelDef;
use crate::levels::registry::LevelRegistry;
use crate::locomotion::{GameLayer, Surface, SurfaceTag};

/// Marker for entities belonging to the currently loaded level.
#[derive(Component, Debug)]
pub struct LevelSurface;

pub(crate) fn spawn_current_level(mut commands: Commands, registry: Res<LevelRegistry>) {
    let Some(def) = registry.current_def() else {
        error!("Level registry is empty, nothing to spawn");
        return;
    };

    spawn_level_surfaces(&mut commands, def);
    info!("Spawned level '{}'", def.id);
}

/// Spawn one static collider per surface rectangle. Ground and platform
/// surfaces go on the ground layer so the probe can see them; walls get
/// their own layer.
pub(crate) fn spawn_level_surfaces(commands: &mut Commands, def: &LevelDef) {
    for surface in &def.surfaces {
        let Some(tag) = SurfaceTag::parse(&surface.tag) else {
            warn!(
                "Unknown surface tag '{}' in level '{}', skipping",
                surface.tag, def.id
            );
            continue;
        };

        let layer = match tag {
            SurfaceTag::Wall => GameLayer::Wall,
            SurfaceTag::Ground | SurfaceTag::Platform => GameLayer::Ground,
        };
        let color = match tag {
            SurfaceTag::Ground => Color::srgb(0.35, 0.4, 0.35),
            SurfaceTag::Wall => Color::srgb(0.25, 0.25, 0.35),
            SurfaceTag::Platform => Color::srgb(0.5, 0.4, 0.3),
        };

        let (x, y) = surface.pos;
        let (width, height) = surface.size;

        commands.spawn((
            LevelSurface,
            Surface { tag },
            Sprite {
                color,
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, height),
            CollisionLayers::new(layer, [GameLayer::Player]),
        ));
    }
}
