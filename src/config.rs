//! Runtime configuration.
//!
//! Loaded from an optional TOML file; every section and field falls back to
//! its default, so an empty file is a valid configuration.
//!
//! ```toml
//! [parameters]
//! omega0 = 2.0
//! xi_under = 0.2
//!
//! [export]
//! out_dir = "plots"
//! width = 1800
//! height = 1200
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::params::OscillatorParameters;

/// Settings for writing the two chart variants to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving the PNG files. Created if missing.
    pub out_dir: PathBuf,
    /// File name of the full-horizon chart
    pub full_file: String,
    /// File name of the zoomed chart
    pub zoom_file: String,
    /// Image width [px]
    pub width: u32,
    /// Image height [px]
    pub height: u32,
}

impl Default for ExportConfig {
    /// 12 × 8 in at 300 dpi.
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            full_file: "vibrations_full.png".to_string(),
            zoom_file: "vibrations_zoom.png".to_string(),
            width: 3600,
            height: 2400,
        }
    }
}

impl ExportConfig {
    /// Path of the full-horizon chart
    pub fn full_path(&self) -> PathBuf {
        self.out_dir.join(&self.full_file)
    }

    /// Path of the zoomed chart
    pub fn zoom_path(&self) -> PathBuf {
        self.out_dir.join(&self.zoom_file)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial oscillator parameters
    pub parameters: OscillatorParameters,
    /// Chart export settings
    pub export: ExportConfig,
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check parameters and export settings.
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        if self.export.width < 200 || self.export.height < 150 {
            return Err(Error::Config(format!(
                "export size {}x{} is below the 200x150 minimum",
                self.export.width, self.export.height
            )));
        }
        if self.export.full_file.is_empty() || self.export.zoom_file.is_empty() {
            return Err(Error::Config("export file names must not be empty".into()));
        }
        if self.export.full_file == self.export.zoom_file {
            return Err(Error::Config(
                "full and zoom charts must use different file names".into(),
            ));
        }
        Ok(())
    }
}
