//! Levels domain: data definitions for `assets/data/levels.ron`.
//!
//! These structs mirror the RON structure and are used for
//! deserialization; the registry provides ordered access.

use serde::{Deserialize, Serialize};

/// Common wrapper for RON files with schema_version and items
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    /// Where the character respawns. Missing anchors fall back to the
    /// zero vector at lookup time.
    pub spawn_anchor: Option<(f32, f32)>,
    /// Crossing this x completes the level.
    pub end_anchor: Option<(f32, f32)>,
    pub surfaces: Vec<SurfaceDef>,
}

/// One static rectangle of level geometry. `tag` is matched
/// case-insensitively against the known surface kinds at spawn time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SurfaceDef {
    pub tag: String,
    pub pos: (f32, f32),
    pub size: (f32, f32),
}

impl LevelDef {
    /// Built-in level used when `levels.ron` cannot be loaded: one floor,
    /// two walls, a platform, and a reachable endpoint.
    pub fn fallback() -> Self {
        let surface = |tag: &str, pos: (f32, f32), size: (f32, f32)| SurfaceDef {
            tag: tag.to_string(),
            pos,
            size,
        };

        Self {
            id: "fallback".to_string(),
            spawn_anchor: Some((-350.0, -140.0)),
            end_anchor: Some((350.0, -140.0)),
            surfaces: vec![
                surface("ground", (0.0, -200.0), (900.0, 40.0)),
                surface("wall", (-470.0, 0.0), (40.0, 440.0)),
                surface("wall", (470.0, 0.0), (40.0, 440.0)),
                surface("platform", (0.0, -60.0), (160.0, 20.0)),
            ],
        }
    }
}
