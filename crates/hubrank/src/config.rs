use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Engine settings, usually read from a `hubrank.toml`.
///
/// ```toml
/// [centrality]
/// parallel = true
/// normalized = false
///
/// [selection]
/// fraction = 0.05
/// seed = 7
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub centrality: CentralityConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralityConfig {
    /// Spread sources over the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Scale betweenness by `1 / ((n - 1)(n - 2))` when `n > 2`.
    #[serde(default)]
    pub normalized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Share of nodes picked for removal.
    #[serde(default = "default_fraction")]
    pub fraction: f64,
    /// Seed for the random baseline selection.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            fraction: default_fraction(),
            seed: default_seed(),
        }
    }
}

const fn default_fraction() -> f64 {
    0.1
}

const fn default_seed() -> u64 {
    42
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or out-of-range values.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("failed to parse engine config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidFraction`] when `selection.fraction` is outside
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<(), GraphError> {
        let f = self.selection.fraction;
        if !(0.0..=1.0).contains(&f) {
            return Err(GraphError::InvalidFraction(f));
        }
        Ok(())
    }
}
