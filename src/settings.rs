// src/settings.rs
//! Per-user preferences, passed explicitly to whatever needs them.
//!
//! ```json
//! {
//!   "last_open_dir": "/home/me/profiles",
//!   "last_save_dir": "/home/me/out",
//!   "last_frequency": 100,
//!   "sample_offset": 0.0
//! }
//! ```
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::debug;
use serde::{Deserialize, Serialize};
use crate::profile::{ProfileError, SeriesExpander};
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub last_open_dir: Option<PathBuf>,
    pub last_save_dir: Option<PathBuf>,
    pub last_frequency: Option<u32>,
    /// Added to every generated sample time (0.01 reproduces the nudged variant).
    pub sample_offset: f64,
}
impl Settings {
    /// Loads settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
    pub fn expander(&self) -> SeriesExpander {
        SeriesExpander::with_sample_offset(self.sample_offset)
    }
    pub fn remember_open(&mut self, path: &Path) {
        self.last_open_dir = parent_dir(path);
    }
    pub fn remember_save(&mut self, path: &Path) {
        self.last_save_dir = parent_dir(path);
    }
    pub fn remember_frequency(&mut self, frequency_hz: u32) {
        self.last_frequency = Some(frequency_hz);
    }
}
fn parent_dir(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
