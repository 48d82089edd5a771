// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for inkey.
//!
//! A theory file sets the session defaults and can add scales to (or
//! replace) the built-in catalog. YAML is the default format; files with a
//! `.toml` extension are read as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::music::{KeyFinder, PitchClass, ScaleCatalog, ScaleDefinition};
use crate::session::{InKeySession, DEFAULT_MAX_LISTED_KEYS};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TheoryFile {
    /// Use only the configured scales, dropping the built-ins
    #[serde(default)]
    pub replace_builtin: bool,
    /// Session defaults
    #[serde(default)]
    pub session: SessionConfig,
    /// Extra scale definitions, appended after the built-ins
    #[serde(default)]
    pub scales: Vec<ScaleDefinition>,
}

impl TheoryFile {
    /// Load a configuration file, choosing the format from the extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let file = if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
        .with_context(|| format!("Invalid config file: {:?}", path))?;
        info!(path = ?path, scales = file.scales.len(), "Loaded theory config");
        Ok(file)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration, choosing the format from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Build the scale catalog described by this file
    pub fn build_catalog(&self) -> Result<ScaleCatalog> {
        let catalog = if self.replace_builtin {
            if self.scales.is_empty() {
                warn!("replace_builtin is set but no scales are configured");
            }
            ScaleCatalog::new(self.scales.clone())
        } else {
            ScaleCatalog::builtin().with_scales(self.scales.clone())
        };
        catalog.context("Invalid scale catalog in configuration")
    }

    /// Build a session using this file's catalog and defaults
    pub fn build_session(&self) -> Result<InKeySession> {
        let catalog = self.build_catalog()?;
        let root = self.session.reference_root()?;
        Ok(InKeySession::new(KeyFinder::new(catalog))
            .with_reference_root(root)
            .with_max_listed_keys(self.session.max_listed_keys))
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

/// Session defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Pitch class transposition offsets are measured from (e.g. "C", "Bb")
    #[serde(default = "default_reference_root")]
    pub reference_root: String,
    /// Number of matching keys above which the list is replaced by a hint
    #[serde(default = "default_max_listed_keys")]
    pub max_listed_keys: usize,
}

fn default_reference_root() -> String {
    "C".to_string()
}
fn default_max_listed_keys() -> usize {
    DEFAULT_MAX_LISTED_KEYS
}

impl SessionConfig {
    /// Parsed reference root
    pub fn reference_root(&self) -> Result<PitchClass> {
        self.reference_root
            .parse::<PitchClass>()
            .with_context(|| format!("Invalid reference root: {:?}", self.reference_root))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reference_root: default_reference_root(),
            max_listed_keys: default_max_listed_keys(),
        }
    }
}
