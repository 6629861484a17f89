//! Scene configuration types: the quad grid fed to the batch.

use serde::{Deserialize, Serialize};

/// Quad grid settings.
///
/// The grid is centered at the origin in world units; the orthographic view
/// is `view_scale` world units tall and `aspect * view_scale` wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Edge length of each quad in world units (valid range: 0.0001-1.0).
    pub quad_size: f32,
    /// Grid cell pitch in world units (valid range: quad_size-1.0).
    pub quad_gap: f32,
    /// Orthographic view height in world units (valid range: 0.1-100.0).
    pub view_scale: f32,
    /// Rows and columns added per grow step (valid range: 1-64).
    pub growth_step: u32,
    /// Fill color for all quads, hex RGB(A).
    pub color: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            quad_size: 0.01,
            quad_gap: 0.012,
            view_scale: 2.0,
            growth_step: 2,
            color: "#ff0000".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_config_defaults() {
        let config = SceneConfig::default();
        assert!((config.quad_size - 0.01).abs() < f32::EPSILON);
        assert!((config.quad_gap - 0.012).abs() < f32::EPSILON);
        assert!((config.view_scale - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.growth_step, 2);
        assert_eq!(config.color, "#ff0000");
    }

    #[test]
    fn scene_config_partial_toml() {
        let toml_str = r##"
quad_size = 0.05
color = "#00ff00"
"##;
        let config: SceneConfig = toml::from_str(toml_str).unwrap();
        assert!((config.quad_size - 0.05).abs() < f32::EPSILON);
        assert_eq!(config.color, "#00ff00");
        assert_eq!(config.growth_step, 2);
    }
}
