use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Tunables read from an optional JSON file. Missing keys keep their defaults.
///
/// ```json
/// { "max_display_size": 800, "marker_radius": 6.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Opened images are shrunk to fit within this many pixels per side.
    pub max_display_size: u32,
    /// Radius of the measurement marker circles, in pixels.
    pub marker_radius: f32,
    /// Stroke width of the measurement markers.
    pub marker_stroke: f32,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_display_size: 500,
            marker_radius: 5.0,
            marker_stroke: 2.0,
            window_size: [900.0, 700.0],
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: ViewerConfig = serde_json::from_str(text).context("parsing config JSON")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_display_size == 0 {
            bail!("max_display_size must be at least 1");
        }
        if self.marker_radius <= 0.0 || self.marker_stroke <= 0.0 {
            bail!("marker_radius and marker_stroke must be positive");
        }
        Ok(())
    }
}

/// Load the configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ViewerConfig::from_json(&text).with_context(|| format!("loading config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.max_display_size, 500);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.json");
        std::fs::write(&path, r#"{ "max_display_size": 800 }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.max_display_size, 800);
        assert_eq!(config.marker_radius, 5.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ViewerConfig::from_json(r#"{ "max_display_size": 0 }"#).is_err());
        assert!(ViewerConfig::from_json(r#"{ "marker_radius": -1.0 }"#).is_err());
        assert!(ViewerConfig::from_json(r#"{ "zoom": 2 }"#).is_err());
    }

    #[test]
    fn unreadable_file_names_path() {
        let err = load_config(Some(Path::new("/nonexistent/viewer.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("viewer.json"));
    }
}
