//! # Configuration Module
//!
//! The host-supplied fretboard inputs (fret count and tuning), with JSON
//! saving and loading so a setup can be kept between sessions.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::fretboard::Fretboard;

/// Fret count used when none is configured.
pub const DEFAULT_FRETS: usize = 12;

/// Standard guitar tuning, lowest string first.
pub const STANDARD_TUNING: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// Fret count and tuning for one fretboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardConfig {
    pub frets: usize,
    /// Open string note names, lowest string first.
    pub tuning: Vec<String>,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            frets: DEFAULT_FRETS,
            tuning: STANDARD_TUNING.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FretboardConfig {
    /// Validates the configuration into a fretboard layout.
    pub fn fretboard(&self) -> Result<Fretboard> {
        Fretboard::new(self.frets, &self.tuning)
    }
}

/// Saves the configuration to a JSON file.
///
/// # Arguments
/// * `config` - The configuration to save
/// * `path` - File path to write (e.g. "fretboard.json")
pub fn save_config(config: &FretboardConfig, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json_string =
        serde_json::to_string_pretty(config).context("serializing fretboard config")?;
    let mut file = File::create(path)
        .with_context(|| format!("creating config file {}", path.display()))?;
    file.write_all(json_string.as_bytes())
        .with_context(|| format!("writing config file {}", path.display()))?;
    log::info!("Saved fretboard config to {}", path.display());
    Ok(())
}

/// Loads a configuration from a JSON file and checks that it describes a
/// valid fretboard. Missing fields take their default values.
///
/// # Arguments
/// * `path` - File path to read (e.g. "fretboard.json")
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<FretboardConfig> {
    let path = path.as_ref();
    let mut file =
        File::open(path).with_context(|| format!("opening config file {}", path.display()))?;
    let mut data = String::new();
    file.read_to_string(&mut data)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: FretboardConfig = serde_json::from_str(&data)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    config
        .fretboard()
        .with_context(|| format!("invalid fretboard in {}", path.display()))?;
    log::info!("Loaded fretboard config from {}", path.display());
    Ok(config)
}
