//! Loader for tuning and level files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::LevelRegistry;
use super::validation::{validate_level, validate_tuning};
use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a file as RON, or as JSON when it has a `.json` extension.
fn parse_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents).map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
    } else {
        ron_options()
            .from_str(&contents)
            .map_err(|e| ContentLoadError {
                file: file_name,
                message: format!("Parse error: {}", e),
            })
    }
}

/// Load and validate movement tuning.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, Vec<ContentLoadError>> {
    let tuning: MovementTuning = parse_file(path).map_err(|e| vec![e])?;

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        Ok(tuning)
    } else {
        let file = path.display().to_string();
        Err(errors
            .into_iter()
            .map(|e| ContentLoadError {
                file: file.clone(),
                message: e.to_string(),
            })
            .collect())
    }
}

/// Load every level in a `DataFile<LevelDef>` into a registry.
/// Levels that fail validation are reported and left out.
pub fn load_levels(path: &Path) -> Result<LevelRegistry, Vec<ContentLoadError>> {
    let data: DataFile<LevelDef> = parse_file(path).map_err(|e| vec![e])?;

    let file = path.display().to_string();
    let mut registry = LevelRegistry::default();
    let mut errors = Vec::new();

    for level in data.items {
        let problems = validate_level(&level);
        if problems.is_empty() {
            registry.insert(level);
        } else {
            errors.extend(problems.into_iter().map(|e| ContentLoadError {
                file: file.clone(),
                message: e.to_string(),
            }));
        }
    }

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(errors)
    }
}
