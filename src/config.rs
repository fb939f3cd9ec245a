// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Build configuration
//!
//! Optional `scadgen.toml` controlling where scripts are written and which
//! pieces get built, including custom piece patterns beyond the standard
//! catalog.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::part::STANDARD_PIECES;

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "scadgen.toml";

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory compiled scripts are written to
    pub out_dir: PathBuf,
    /// Names of pieces to build; empty means every known piece
    pub pieces: Vec<String>,
    /// Extra piece patterns, name to tile rows; a custom piece with a
    /// standard name shadows the standard one
    pub custom_pieces: BTreeMap<String, Vec<String>>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("parts"),
            pieces: Vec::new(),
            custom_pieces: BTreeMap::new(),
        }
    }
}

impl BuildConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: BuildConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        if let Ok(out_dir) = std::env::var("SCADGEN_OUT_DIR") {
            config.out_dir = PathBuf::from(out_dir);
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// The pieces this config selects, as (name, pattern rows) in build
    /// order: the standard catalog first, then custom pieces by name.
    pub fn selected_pieces(&self) -> Vec<(String, Vec<String>)> {
        let mut selected: Vec<(String, Vec<String>)> = STANDARD_PIECES
            .iter()
            .filter(|(name, _)| !self.custom_pieces.contains_key(*name))
            .map(|(name, rows)| {
                let rows = rows.iter().map(|row| (*row).to_string()).collect();
                ((*name).to_string(), rows)
            })
            .collect();

        for (name, rows) in &self.custom_pieces {
            selected.push((name.clone(), rows.clone()));
        }

        if !self.pieces.is_empty() {
            selected.retain(|(name, _)| self.pieces.iter().any(|pick| pick == name));
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_standard_catalog() {
        let config = BuildConfig::default();
        assert_eq!(config.out_dir, PathBuf::from("parts"));

        let names: Vec<String> = config
            .selected_pieces()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["T", "L", "O", "I", "S"]);
    }

    #[test]
    fn test_piece_filter_limits_selection() {
        let config = BuildConfig {
            pieces: vec!["T".to_string(), "S".to_string()],
            ..BuildConfig::default()
        };

        let names: Vec<String> = config
            .selected_pieces()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["T", "S"]);
    }

    #[test]
    fn test_custom_piece_shadows_standard_name() {
        let config: BuildConfig = toml::from_str(
            r#"
            out_dir = "build/scad"

            [custom_pieces]
            T = ["010", "111", "010"]
            Z = ["011", "110"]
            "#,
        )
        .unwrap();
        assert_eq!(config.out_dir, PathBuf::from("build/scad"));

        let selected = config.selected_pieces();
        let names: Vec<&str> = selected.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["L", "O", "I", "S", "T", "Z"]);

        let (_, t_rows) = selected
            .iter()
            .find(|(name, _)| name == "T")
            .expect("custom T present");
        assert_eq!(t_rows, &vec!["010", "111", "010"]);
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("scadgen.toml");

        let mut config = BuildConfig::default();
        config.pieces = vec!["I".to_string()];
        config.save(&path).unwrap();

        let loaded = BuildConfig::from_file(&path).unwrap();
        assert_eq!(loaded.pieces, vec!["I"]);
        assert_eq!(loaded.out_dir, config.out_dir);
    }
}
