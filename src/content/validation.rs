//! Validation for tuning values and level geometry.

use super::data::LevelDef;
use crate::movement::MovementTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: String,
    pub reason: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.reason
        )
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a numeric tuning field
macro_rules! check_field {
    ($errors:expr, $tuning:expr, $field:ident, $ok:expr, $reason:expr) => {
        let value = $tuning.$field;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                source_type: "MovementTuning",
                source_id: "tuning".to_string(),
                field: stringify!($field).to_string(),
                reason: format!("{} (got {})", $reason, value),
            });
        }
    };
}

fn positive(value: f32) -> bool {
    value > 0.0
}

fn non_negative(value: f32) -> bool {
    value >= 0.0
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_field!(errors, tuning, move_speed, non_negative, "must be >= 0");
    check_field!(errors, tuning, jump_velocity, non_negative, "must be >= 0");
    check_field!(errors, tuning, gravity, non_negative, "must be >= 0");
    check_field!(errors, tuning, max_fall_speed, positive, "must be > 0");
    check_field!(errors, tuning, jump_buffer_time, non_negative, "must be >= 0");
    check_field!(errors, tuning, coyote_time, non_negative, "must be >= 0");
    check_field!(errors, tuning, collision_tolerance, non_negative, "must be >= 0");
    check_field!(errors, tuning, wall_sense_distance, positive, "must be > 0");
    check_field!(errors, tuning, actor_width, positive, "must be > 0");
    check_field!(errors, tuning, actor_height, positive, "must be > 0");
    check_field!(errors, tuning, max_tick_delta, positive, "must be > 0");

    if let Some(hitbox) = tuning.hitbox {
        let size_ok = hitbox.width.is_finite()
            && hitbox.height.is_finite()
            && hitbox.width > 0.0
            && hitbox.height > 0.0;
        let offset_ok = hitbox.offset.0.is_finite() && hitbox.offset.1.is_finite();
        if !size_ok || !offset_ok {
            errors.push(ValidationError {
                source_type: "MovementTuning",
                source_id: "tuning".to_string(),
                field: "hitbox".to_string(),
                reason: format!(
                    "needs a positive finite size and finite offset (got {:?})",
                    hitbox
                ),
            });
        }
    }

    errors
}

/// Validate a level's spawn point and every solid.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if level.id.is_empty() {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: level.name.clone(),
            field: "id".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if !level.spawn.0.is_finite() || !level.spawn.1.is_finite() {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: level.id.clone(),
            field: "spawn".to_string(),
            reason: format!("must be finite (got {:?})", level.spawn),
        });
    }

    for (index, def) in level.solids.iter().enumerate() {
        if let Err(e) = def.to_solid() {
            errors.push(ValidationError {
                source_type: "Level",
                source_id: level.id.clone(),
                field: format!("solids[{}]", index),
                reason: e.to_string(),
            });
        }
    }

    errors
}
