//! Locomotion domain: components and physics layers for the character.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::collections::HashSet;

use crate::locomotion::state::{JumpRules, LocomotionState, SurfaceTag};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Load-bearing surfaces (floors, platforms) the ground probe tests
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-character locomotion state. One instance per character, owned by
/// the entity; nothing here is shared between characters.
#[derive(Component, Debug)]
pub struct CharacterState {
    pub locomotion: LocomotionState,
    /// Latches after the end anchor is crossed; cleared by respawn.
    pub level_finished: bool,
}

impl CharacterState {
    pub fn spawned(rules: &JumpRules) -> Self {
        Self {
            locomotion: LocomotionState::spawned(rules),
            level_finished: false,
        }
    }
}

/// A solid surface the character can touch, tagged by kind.
#[derive(Component, Debug, Clone, Copy)]
pub struct Surface {
    pub tag: SurfaceTag,
}

/// The set of tagged surface entities currently in contact with the
/// character, maintained from collision start/end messages. Contact-stay
/// effects are re-applied every step for each non-empty tag.
#[derive(Component, Debug, Default)]
pub struct TouchingSurfaces {
    ground: HashSet<Entity>,
    wall: HashSet<Entity>,
    platform: HashSet<Entity>,
}

impl TouchingSurfaces {
    fn set_mut(&mut self, tag: SurfaceTag) -> &mut HashSet<Entity> {
        match tag {
            SurfaceTag::Ground => &mut self.ground,
            SurfaceTag::Wall => &mut self.wall,
            SurfaceTag::Platform => &mut self.platform,
        }
    }

    pub fn insert(&mut self, tag: SurfaceTag, entity: Entity) -> bool {
        self.set_mut(tag).insert(entity)
    }

    /// Returns true when the entity was actually being tracked, so a
    /// stray end message never dispatches a spurious exit.
    pub fn remove(&mut self, tag: SurfaceTag, entity: Entity) -> bool {
        self.set_mut(tag).remove(&entity)
    }

    /// Forget every tracked contact. Used when level geometry is torn
    /// down, where no end messages will arrive for the old colliders.
    pub fn clear(&mut self) {
        self.ground.clear();
        self.wall.clear();
        self.platform.clear();
    }

    pub fn touching(&self, tag: SurfaceTag) -> bool {
        match tag {
            SurfaceTag::Ground => !self.ground.is_empty(),
            SurfaceTag::Wall => !self.wall.is_empty(),
            SurfaceTag::Platform => !self.platform.is_empty(),
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Cosmetic animation inputs written by the movement systems and consumed
/// by presentation systems.
#[derive(Component, Debug, Default)]
pub struct AnimationParams {
    /// Absolute horizontal speed, world units per second.
    pub speed: f32,
}
