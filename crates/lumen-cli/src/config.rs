//! Scenario configuration read from TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lumen_math::Vector3;
use lumen_raytrace::Sphere;
use serde::{Deserialize, Serialize};

/// Rotation axis for the demo transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub demo: DemoConfig,
    pub probe: ProbeConfig,
}

/// Translate, rotate, translate again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Initial translation.
    pub translation: Vector3,
    pub axis: Axis,
    /// Rotation angle in radians.
    pub angle: f64,
    pub around_origin: bool,
    /// Translation added after the rotation.
    pub offset: Vector3,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            translation: Vector3::new(1.0, 2.0, 3.0),
            axis: Axis::Y,
            angle: 1.5,
            around_origin: true,
            offset: Vector3::new(2.0, 2.0, 2.0),
        }
    }
}

/// A sphere, an optional move applied to it, and a ray to shoot at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub sphere: Sphere,
    pub move_sphere: Vector3,
    pub origin: Vector3,
    /// Normalized when the ray is built.
    pub direction: Vector3,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            sphere: Sphere::default(),
            move_sphere: Vector3::ZERO,
            origin: Vector3::new(0.0, 0.0, -5.0),
            direction: Vector3::K,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load the configuration at `path`, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
            [demo]
            axis = "z"
            angle = 0.25
            translation = { x = 5.0, y = 0.0, z = 0.0 }

            [probe]
            sphere = { c = { x = 0.0, y = 0.0, z = 10.0 }, r = 2.0 }
            origin = { x = 0.0, y = 0.0, z = 0.0 }
        "#;
        let config = Config::from_toml_str(text).unwrap();
        assert_eq!(config.demo.axis, Axis::Z);
        assert_eq!(config.demo.angle, 0.25);
        assert_eq!(config.demo.translation, Vector3::new(5.0, 0.0, 0.0));
        assert!(config.demo.around_origin);
        assert_eq!(config.demo.offset, Vector3::new(2.0, 2.0, 2.0));

        assert_eq!(config.probe.sphere, Sphere::new(Vector3::new(0.0, 0.0, 10.0), 2.0));
        assert_eq!(config.probe.origin, Vector3::ZERO);
        assert_eq!(config.probe.direction, Vector3::K);
    }

    #[test]
    fn test_bad_axis_is_rejected() {
        let err = Config::from_toml_str("[demo]\naxis = \"w\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("lumen-config-that-does-not-exist.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("lumen-config-{}.toml", std::process::id()));
        fs::write(&path, "[demo]\naround_origin = false\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!config.demo.around_origin);
    }
}
