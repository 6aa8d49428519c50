//! Levels domain: RON loading for level and tuning data.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::levels::data::{DataFile, LevelDef};
use crate::locomotion::LocomotionTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_to_string(path: &Path) -> Result<String, LevelLoadError> {
    fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load the ordered level list from `levels.ron`.
pub fn load_levels(base_path: &Path) -> Result<Vec<LevelDef>, LevelLoadError> {
    let path = base_path.join("levels.ron");
    let contents = read_to_string(&path)?;

    let data: DataFile<LevelDef> =
        ron_options()
            .from_str(&contents)
            .map_err(|e| LevelLoadError {
                file: path.display().to_string(),
                message: format!("Parse error: {}", e),
            })?;

    Ok(data.items)
}

/// Load locomotion tunables from `tuning.ron`. Fields missing from the
/// file keep their defaults.
pub fn load_tuning(base_path: &Path) -> Result<LocomotionTuning, LevelLoadError> {
    let path = base_path.join("tuning.ron");
    let contents = read_to_string(&path)?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| LevelLoadError {
            file: path.display().to_string(),
            message: format!("Parse error: {}", e),
        })
}
