//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Inner width in logical pixels (valid range: 100-16384).
    pub width: u32,
    /// Inner height in logical pixels (valid range: 100-16384).
    pub height: u32,
    /// Static window title.
    pub title: String,
    /// Present with vsync (Fifo) rather than immediate mode.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 1000,
            title: "Dynamic Batching".into(),
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 1000);
        assert_eq!(config.title, "Dynamic Batching");
        assert!(config.vsync);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
width = 800
vsync = false
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.width, 800);
        assert!(!config.vsync);
        // Defaults preserved
        assert_eq!(config.height, 1000);
        assert_eq!(config.title, "Dynamic Batching");
    }
}
