//! Camera domain: smoothed follow and height-coupled zoom.

use bevy::prelude::*;

use crate::core::GameState;
use crate::locomotion::Player;

#[derive(Resource, Debug, Clone)]
pub struct CameraSettings {
    /// Exponential smoothing rate for follow and zoom.
    pub smoothness: f32,
    /// Widen the view as the character climbs.
    pub zoom_to_height: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            smoothness: 7.0,
            zoom_to_height: true,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                follow_player.run_if(in_state(GameState::Playing)),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn follow_player(
    time: Res<Time>,
    settings: Res<CameraSettings>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera2d>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    let t = (settings.smoothness * time.delta_secs()).min(1.0);
    let target = player.translation.truncate();

    for (mut camera, mut projection) in &mut camera_query {
        let next = camera.translation.truncate().lerp(target, t);
        camera.translation.x = next.x;
        camera.translation.y = next.y;

        if settings.zoom_to_height {
            if let Projection::Orthographic(ortho) = projection.as_mut() {
                let target_scale = (player.translation.y / 400.0).clamp(1.0, 2.5);
                ortho.scale += (target_scale - ortho.scale) * t;
            }
        }
    }
}
