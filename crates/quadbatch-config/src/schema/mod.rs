//! Configuration schema types for quadbatch.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the stock demo.

mod logging;
mod scene;
mod window;

pub use logging::*;
pub use scene::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for quadbatch.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuadbatchConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: QuadbatchConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, WindowConfig::default().width);
        assert_eq!(config.scene.growth_step, SceneConfig::default().growth_step);
    }

    #[test]
    fn partial_toml_keeps_other_sections_default() {
        let config: QuadbatchConfig = toml::from_str(
            r#"
[scene]
growth_step = 4
"#,
        )
        .unwrap();
        assert_eq!(config.scene.growth_step, 4);
        assert_eq!(config.window.title, "Dynamic Batching");
    }
}
