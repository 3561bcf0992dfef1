//! Content domain: tuning and level files, validation, and startup loading.

mod data;
#[cfg(feature = "dev-tools")]
mod dev;
mod loader;
mod registry;
mod validation;


pub use data::{DataFile, LevelDef, SolidDef};
#[cfg(feature = "dev-tools")]
pub use dev::test_room_level;
pub use loader::{ContentLoadError, load_levels, load_tuning};
pub use registry::LevelRegistry;
pub use validation::{ValidationError, validate_level, validate_tuning};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::rooms::BuildRoomEvent;

/// Where startup content lives and which level to build first.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub tuning: PathBuf,
    pub levels: PathBuf,
    pub initial_level: Option<String>,
}

impl Default for ContentPaths {
    fn default() -> Self {
        let base = PathBuf::from("assets/data");
        Self {
            tuning: base.join("tuning.ron"),
            levels: base.join("levels.ron"),
            initial_level: Some("level_demo".to_string()),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(Startup, load_content);
    }
}

fn load_content(
    mut commands: Commands,
    paths: Res<ContentPaths>,
    mut build_room: MessageWriter<BuildRoomEvent>,
) {
    match load_tuning(&paths.tuning) {
        Ok(tuning) => {
            info!(
                "Loaded tuning from {}: jump height {:.1}, air time {:.2}s",
                paths.tuning.display(),
                tuning.single_jump_height(),
                tuning.jump_air_time()
            );
            commands.insert_resource(tuning);
        }
        Err(errors) => {
            for e in &errors {
                warn!("{}", e);
            }
            warn!("Using default movement tuning");
        }
    }

    let mut registry = match load_levels(&paths.levels) {
        Ok(registry) => registry,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            LevelRegistry::default()
        }
    };

    let initial_level = if registry.is_empty() {
        fallback_level(&mut registry)
    } else {
        paths.initial_level.clone()
    };

    info!("{}", registry.summary());

    if let Some(level_id) = initial_level {
        build_room.write(BuildRoomEvent { level_id });
    }

    commands.insert_resource(registry);
}

#[cfg(feature = "dev-tools")]
fn fallback_level(registry: &mut LevelRegistry) -> Option<String> {
    warn!("No levels loaded, falling back to the built-in test room");
    let level = test_room_level();
    let id = level.id.clone();
    registry.insert(level);
    Some(id)
}

#[cfg(not(feature = "dev-tools"))]
fn fallback_level(_registry: &mut LevelRegistry) -> Option<String> {
    warn!("No levels loaded, nothing to build");
    None
}
