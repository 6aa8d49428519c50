//! Locomotion domain: the ground-support probe.
//!
//! A fixed-size box held just beneath the character's collider. Collision
//! start/end messages only say that *some* contact exists; the probe
//! overlap is the authoritative "is this contact load-bearing" test, so a
//! glancing touch on a ledge edge never counts as support.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{GameLayer, Player};

pub const PROBE_SIZE: Vec2 = Vec2::new(16.0, 6.0);

/// Half height assumed when the character collider is not a cuboid.
const FALLBACK_HALF_HEIGHT: f32 = 24.0;

#[derive(Component, Debug)]
pub struct GroundProbe {
    pub size: Vec2,
    /// Center as of the last [`refresh_probe`] run.
    pub center: Vec2,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            size: PROBE_SIZE,
            center: Vec2::ZERO,
        }
    }
}

/// Probe center for a character at `position` with the given collider
/// half height: centered under the feet, flush with the collider bottom.
pub fn probe_center(position: Vec2, half_height: f32, probe_size: Vec2) -> Vec2 {
    position - Vec2::new(0.0, half_height + probe_size.y / 2.0)
}

/// Recompute the probe box from the character's pose. Runs once per step,
/// before any contact decision reads the probe.
pub(crate) fn refresh_probe(
    mut query: Query<(&Transform, &Collider, &mut GroundProbe), With<Player>>,
) {
    for (transform, collider, mut probe) in &mut query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => FALLBACK_HALF_HEIGHT,
        };

        probe.center = probe_center(transform.translation.truncate(), half_height, probe.size);
    }
}

/// True when any collider on the ground layer overlaps the probe box.
/// Pure query, safe to call repeatedly within a step.
pub(crate) fn probe_hits_ground(spatial_query: &SpatialQuery, probe: &GroundProbe) -> bool {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    !spatial_query
        .shape_intersections(
            &Collider::rectangle(probe.size.x, probe.size.y),
            probe.center,
            0.0,
            &ground_filter,
        )
        .is_empty()
}

#[cfg(feature = "dev-tools")]
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<crate::locomotion::LocomotionTuning>,
    query: Query<(&Transform, &GroundProbe), With<Player>>,
) {
    let red = Color::srgb(0.9, 0.2, 0.2);

    for (transform, probe) in &query {
        gizmos.rect_2d(Isometry2d::from_translation(probe.center), probe.size, red);

        // Death threshold, drawn around the character like the probe
        let x = transform.translation.x;
        gizmos.line_2d(
            Vec2::new(x - 300.0, tuning.death_height),
            Vec2::new(x + 300.0, tuning.death_height),
            red,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_sits_flush_under_the_collider() {
        let center = probe_center(Vec2::new(10.0, 100.0), 24.0, Vec2::new(16.0, 6.0));
        assert_eq!(center, Vec2::new(10.0, 73.0));
    }

    #[test]
    fn probe_tracks_horizontal_position() {
        let size = Vec2::new(16.0, 6.0);
        let a = probe_center(Vec2::new(-50.0, 0.0), 24.0, size);
        let b = probe_center(Vec2::new(50.0, 0.0), 24.0, size);
        assert_eq!(a.y, b.y);
        assert_eq!(b.x - a.x, 100.0);
    }
}
