//! Levels domain: the ordered level registry and anchor lookup.

use bevy::prelude::*;

use crate::levels::data::LevelDef;

/// Ordered level definitions plus the index of the one in play.
#[derive(Resource, Debug, Default)]
pub struct LevelRegistry {
    pub levels: Vec<LevelDef>,
    pub current: usize,
}

impl LevelRegistry {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels, current: 0 }
    }

    pub fn current_def(&self) -> Option<&LevelDef> {
        self.levels.get(self.current)
    }

    /// Step to the next level. Returns false (and stays put) when there
    /// is no next level to load.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.levels.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

/// The current level's spawn and end anchors, refreshed on every level
/// change so per-step checks never walk the registry.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LevelAnchors {
    pub spawn: Vec2,
    pub end: Vec2,
}

impl LevelAnchors {
    /// Anchor lookups never fail: a missing anchor defaults to the zero
    /// vector, loudly.
    pub fn from_def(def: &LevelDef) -> Self {
        let resolve = |anchor: Option<(f32, f32)>, which: &str| match anchor {
            Some((x, y)) => Vec2::new(x, y),
            None => {
                error!(
                    "Level '{}' has no {} anchor: defaulting to the zero vector",
                    def.id, which
                );
                Vec2::ZERO
            }
        };

        Self {
            spawn: resolve(def.spawn_anchor, "spawn"),
            end: resolve(def.end_anchor, "end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str) -> LevelDef {
        LevelDef {
            id: id.to_string(),
            spawn_anchor: Some((-100.0, 0.0)),
            end_anchor: Some((100.0, 0.0)),
            surfaces: Vec::new(),
        }
    }

    #[test]
    fn registry_advances_in_order_and_stops_at_the_end() {
        let mut registry = LevelRegistry::new(vec![def("one"), def("two")]);
        assert_eq!(registry.current_def().unwrap().id, "one");

        assert!(registry.advance());
        assert_eq!(registry.current_def().unwrap().id, "two");

        assert!(!registry.advance());
        assert_eq!(registry.current_def().unwrap().id, "two");
    }

    #[test]
    fn missing_anchors_default_to_zero() {
        let mut level = def("bare");
        level.spawn_anchor = None;
        level.end_anchor = None;

        let anchors = LevelAnchors::from_def(&level);
        assert_eq!(anchors.spawn, Vec2::ZERO);
        assert_eq!(anchors.end, Vec2::ZERO);
    }

    #[test]
    fn fallback_level_has_usable_anchors() {
        let anchors = LevelAnchors::from_def(&LevelDef::fallback());
        assert!(anchors.end.x > anchors.spawn.x);
    }
}
