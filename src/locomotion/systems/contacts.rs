//! Locomotion domain: surface contact tracking.
//!
//! Collision start/end messages maintain the per-tag touching set; every
//! step, each tag still in contact re-applies its stay rule. Exit rules
//! fire as the end messages drain, so all contact effects are settled
//! before jump resolution reads the state.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::locomotion::components::{CharacterState, Player, Surface, TouchingSurfaces};
use crate::locomotion::probe::{GroundProbe, probe_hits_ground};
use crate::locomotion::state::SurfaceTag;
use crate::locomotion::LocomotionTuning;

pub(crate) fn track_surface_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    surface_query: Query<&Surface>,
    tuning: Res<LocomotionTuning>,
    mut player_query: Query<(Entity, &mut TouchingSurfaces, &mut CharacterState), With<Player>>,
) {
    let Ok((player_entity, mut touching, mut state)) = player_query.single_mut() else {
        // Consume events if no player
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    let rules = tuning.jump_rules();

    for event in collision_start_events.read() {
        let Some((surface_entity, tag)) =
            tagged_surface(event.collider1, event.collider2, player_entity, &surface_query)
        else {
            continue;
        };

        touching.insert(tag, surface_entity);
    }

    for event in collision_end_events.read() {
        let Some((surface_entity, tag)) =
            tagged_surface(event.collider1, event.collider2, player_entity, &surface_query)
        else {
            continue;
        };

        if touching.remove(tag, surface_entity) {
            state.locomotion.surface_exit(tag, &rules);
            debug!(
                "Surface exit {:?}: phase now {:?}",
                tag,
                state.locomotion.phase()
            );
        }
    }
}

/// Resolve which side of a collision pair is a tagged surface touching
/// the player, if either.
fn tagged_surface(
    collider1: Entity,
    collider2: Entity,
    player: Entity,
    surfaces: &Query<&Surface>,
) -> Option<(Entity, SurfaceTag)> {
    let other = if collider1 == player {
        collider2
    } else if collider2 == player {
        collider1
    } else {
        return None;
    };

    surfaces.get(other).ok().map(|surface| (other, surface.tag))
}

/// Re-apply the stay rule for every tag still in contact. Ground and
/// platform stays share one probe query per step.
pub(crate) fn apply_surface_support(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    mut player_query: Query<(&GroundProbe, &TouchingSurfaces, &mut CharacterState), With<Player>>,
) {
    for (probe, touching, mut state) in &mut player_query {
        let rules = tuning.jump_rules();

        let needs_probe = touching.touching(SurfaceTag::Ground)
            || touching.touching(SurfaceTag::Platform);
        let probe_hit = needs_probe && probe_hits_ground(&spatial_query, probe);

        // Ground before wall: a grounded character never takes a wall grant
        for tag in [SurfaceTag::Ground, SurfaceTag::Platform, SurfaceTag::Wall] {
            if touching.touching(tag) {
                state.locomotion.surface_stay(tag, probe_hit, &rules);
            }
        }
    }
}
