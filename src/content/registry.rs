//! LevelRegistry resource providing lookups for loaded levels.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::LevelDef;

/// Registry of validated levels by id.
#[derive(Resource, Debug, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDef>,
}

impl LevelRegistry {
    pub fn insert(&mut self, level: LevelDef) {
        self.levels.insert(level.id.clone(), level);
    }

    pub fn get(&self, id: &str) -> Option<&LevelDef> {
        self.levels.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns a summary of loaded levels for logging.
    pub fn summary(&self) -> String {
        let solids: usize = self.levels.values().map(|l| l.solids.len()).sum();
        format!(
            "LevelRegistry loaded: {} levels, {} solids",
            self.levels.len(),
            solids
        )
    }
}
