// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Builder configuration

use crate::geometry::Color;
use crate::surface::{Detail, RectMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default file looked up by [`Config::load`]
pub const CONFIG_FILE: &str = "buildgeom.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for the reference scratch surface
    pub surface: SurfaceConfig,
}

/// Initial state and detail levels of an [`ImmediateSurface`](crate::surface::ImmediateSurface)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Fill active before the first `fill()` call
    pub fill: Color,
    pub rect_mode: RectMode,
    /// Samples per Catmull-Rom segment
    pub curve_detail: u32,
    /// Samples per bezier segment
    pub bezier_detail: u32,
    /// Segments around a full ellipse or arc
    pub ellipse_detail: u32,
    pub plane_detail: Detail,
    pub sphere_detail: Detail,
    pub cylinder_detail: Detail,
    pub cone_detail: Detail,
    pub torus_detail: Detail,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            rect_mode: RectMode::Corner,
            curve_detail: 20,
            bezier_detail: 20,
            ellipse_detail: 25,
            plane_detail: Detail::new(1, 1),
            sphere_detail: Detail::new(24, 16),
            cylinder_detail: Detail::new(24, 1),
            cone_detail: Detail::new(24, 1),
            torus_detail: Detail::new(24, 16),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `buildgeom.toml` when present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `BUILDGEOM_*` environment variables on top of this configuration
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(detail) = std::env::var("BUILDGEOM_CURVE_DETAIL") {
            self.surface.curve_detail = detail
                .parse()
                .with_context(|| format!("Invalid BUILDGEOM_CURVE_DETAIL: {}", detail))?;
        }

        if let Ok(detail) = std::env::var("BUILDGEOM_ELLIPSE_DETAIL") {
            self.surface.ellipse_detail = detail
                .parse()
                .with_context(|| format!("Invalid BUILDGEOM_ELLIPSE_DETAIL: {}", detail))?;
        }

        if let Ok(fill) = std::env::var("BUILDGEOM_FILL") {
            self.surface.fill = fill
                .parse()
                .with_context(|| format!("Invalid BUILDGEOM_FILL: {}", fill))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let config: Config = toml::from_str(
            r##"
            [surface]
            fill = "#8ae887"
            curve_detail = 8
            sphere_detail = { x = 6, y = 4 }
            "##,
        )?;

        assert_eq!(config.surface.curve_detail, 8);
        assert_eq!(config.surface.sphere_detail, Detail::new(6, 4));
        assert_eq!(config.surface.fill, Color::from_hex("#8ae887")?);
        assert_eq!(config.surface.bezier_detail, 20);
        assert_eq!(config.surface.rect_mode, RectMode::Corner);
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let mut config = Config::default();
        config.surface.ellipse_detail = 12;
        config.surface.rect_mode = RectMode::Center;

        let file = NamedTempFile::with_suffix(".toml")?;
        config.save(file.path())?;
        assert_eq!(Config::from_file(file.path())?, config);
        Ok(())
    }

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 3] = [
        "BUILDGEOM_CURVE_DETAIL",
        "BUILDGEOM_ELLIPSE_DETAIL",
        "BUILDGEOM_FILL",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        std::env::set_var("BUILDGEOM_CURVE_DETAIL", "7");
        std::env::set_var("BUILDGEOM_ELLIPSE_DETAIL", "9");
        std::env::set_var("BUILDGEOM_FILL", "#857259");
        let mut config = Config::default();
        let applied = config.apply_env_overrides();
        clear_env();
        applied?;

        assert_eq!(config.surface.curve_detail, 7);
        assert_eq!(config.surface.ellipse_detail, 9);
        assert_eq!(config.surface.fill, Color::from_hex("#857259")?);
        assert_eq!(config.surface.bezier_detail, 20);

        for (name, value) in [
            ("BUILDGEOM_CURVE_DETAIL", "many"),
            ("BUILDGEOM_ELLIPSE_DETAIL", "-3"),
            ("BUILDGEOM_FILL", "#zzz"),
        ] {
            std::env::set_var(name, value);
            let result = Config::default().apply_env_overrides();
            clear_env();

            let err = result.expect_err(name);
            assert!(err.to_string().contains(name), "{}: {}", name, err);
        }
        Ok(())
    }
}
