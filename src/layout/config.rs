// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Geometry constants for the trader band layout.
///
/// All values are in abstract layout units. Missing keys in a config file fall back to the
/// defaults.
///
/// ```toml
/// node_width = 160.0
/// node_height = 48.0
/// node_sep = 20.0
/// rank_sep = 40.0
/// band_width = 3000.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Horizontal gap between nodes of one rank.
    pub node_sep: f64,
    /// Vertical gap between ranks.
    pub rank_sep: f64,
    /// Minimum horizontal stride between trader bands.
    pub band_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 160.0,
            node_height: 48.0,
            node_sep: 20.0,
            rank_sep: 40.0,
            band_width: 3000.0,
        }
    }
}

impl LayoutConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = toml::from_str(&content)
            .map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("band_width", self.band_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        for (field, value) in [("node_sep", self.node_sep), ("rank_sep", self.rank_sep)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }

    /// Horizontal distance between neighbouring node origins in one rank.
    pub(crate) fn column_step(&self) -> f64 {
        self.node_width + self.node_sep
    }

    /// Vertical distance between neighbouring rank origins.
    pub(crate) fn rank_step(&self) -> f64 {
        self.node_height + self.rank_sep
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read layout config {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse layout config {path:?}: {source}")]
    Toml { path: PathBuf, source: toml::de::Error },
    #[error("layout config field `{field}` has invalid value {value}")]
    Invalid { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ConfigError, LayoutConfig};

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let config: LayoutConfig =
            toml::from_str("node_sep = 10.0\nband_width = 1200.0\n").expect("toml");
        assert_eq!(config.node_sep, 10.0);
        assert_eq!(config.band_width, 1200.0);
        assert_eq!(config.node_width, LayoutConfig::default().node_width);
        config.validate().expect("valid");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = LayoutConfig::default().to_toml().expect("serialize");
        let parsed: LayoutConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, LayoutConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<LayoutConfig>("node_widht = 10.0").is_err());
    }

    #[rstest]
    #[case::zero_width(LayoutConfig { node_width: 0.0, ..LayoutConfig::default() }, "node_width")]
    #[case::negative_gap(LayoutConfig { node_sep: -1.0, ..LayoutConfig::default() }, "node_sep")]
    #[case::nan_band(
        LayoutConfig { band_width: f64::NAN, ..LayoutConfig::default() },
        "band_width"
    )]
    fn validate_rejects_bad_geometry(#[case] config: LayoutConfig, #[case] expected: &str) {
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected Invalid error, got: {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = LayoutConfig::load("/definitely/not/here/layout.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("layout.toml"));
    }
}
