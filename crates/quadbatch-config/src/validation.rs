//! Full configuration validation.
//!
//! Validates all numeric ranges and the fill color format.

use crate::schema::QuadbatchConfig;
use quadbatch_common::{Color, ConfigError};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QuadbatchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 100, 16384);
    validate_range(&mut errors, "window.height", config.window.height, 100, 16384);

    // Scene constraints
    validate_range_f32(&mut errors, "scene.quad_size", config.scene.quad_size, 0.0001, 1.0);
    validate_range_f32(&mut errors, "scene.quad_gap", config.scene.quad_gap, 0.0001, 1.0);
    validate_range_f32(&mut errors, "scene.view_scale", config.scene.view_scale, 0.1, 100.0);
    validate_range(&mut errors, "scene.growth_step", config.scene.growth_step, 1, 64);

    if config.scene.quad_gap < config.scene.quad_size {
        errors.push(format!(
            "scene.quad_gap ({}) must be at least scene.quad_size ({})",
            config.scene.quad_gap, config.scene.quad_size
        ));
    }

    if Color::from_hex(&config.scene.color).is_none() {
        errors.push(format!(
            "scene.color '{}' is not a valid hex color",
            config.scene.color
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} ({value}) out of range {min}-{max}"));
    }
}

fn validate_range_f32(errors: &mut Vec<String>, name: &str, value: f32, min: f32, max: f32) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} ({value}) out of range {min}-{max}"));
    }
}
