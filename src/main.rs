mod audio;
mod camera;
mod core;
mod fx;
mod levels;
mod locomotion;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Emberleap".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * 1800.0))
        .add_plugins((
            core::CorePlugin,
            levels::LevelsPlugin,
            locomotion::LocomotionPlugin,
            camera::CameraPlugin,
            audio::SoundPlugin,
            fx::FxPlugin,
        ))
        .run();
}
