//! Validation for course layouts.

use std::collections::HashSet;

use super::data::{BoxDef, CourseLayout};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}': {}",
            self.source_type, self.source_id, self.message
        )
    }
}

/// Helper macro for checking a box is usable as a volume
macro_rules! check_box {
    ($errors:expr, $source_type:expr, $source_id:expr, $bounds:expr) => {
        if let Some(message) = box_problem($bounds) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                message,
            });
        }
    };
}

fn box_problem(bounds: &BoxDef) -> Option<String> {
    if !bounds.is_finite() {
        return Some("non-finite coordinates".to_string());
    }
    if bounds.size.iter().any(|s| *s <= 0.0) {
        return Some(format!("size {:?} must be positive on every axis", bounds.size));
    }
    None
}

/// Validate a course layout.
/// Returns a list of validation errors, empty if the layout is usable.
pub fn validate_layout(layout: &CourseLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if layout.spawn_point.iter().any(|v| !v.is_finite()) {
        errors.push(ValidationError {
            source_type: "Course",
            source_id: "spawn_point".to_string(),
            message: "non-finite coordinates".to_string(),
        });
    }

    let mut platform_ids = HashSet::new();
    for platform in &layout.platforms {
        if !platform_ids.insert(platform.id.as_str()) {
            errors.push(ValidationError {
                source_type: "Platform",
                source_id: platform.id.clone(),
                message: "duplicate id".to_string(),
            });
        }
        check_box!(errors, "Platform", platform.id, &platform.bounds);
    }

    let mut unlocked = HashSet::new();
    for zone in &layout.unlock_zones {
        let id = zone.capability.label();
        if !unlocked.insert(zone.capability) {
            errors.push(ValidationError {
                source_type: "UnlockZone",
                source_id: id.to_string(),
                message: "capability already has an unlock zone".to_string(),
            });
        }
        check_box!(errors, "UnlockZone", id, &zone.bounds);
    }

    for (set, boxes) in [
        ("SpecialJumpPad", &layout.special_jump_pads),
        ("SpeedBoostField", &layout.speed_boost_fields),
        ("StaminaCollectible", &layout.stamina_collectibles),
        ("CrouchForwardZone", &layout.crouch_forward_zones),
    ] {
        for (index, bounds) in boxes.iter().enumerate() {
            check_box!(errors, set, index, bounds);
        }
    }

    errors
}
