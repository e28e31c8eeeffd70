//! Site defaults loaded from `config.toml`.
//!
//! The resolver core never reads configuration itself; it takes a
//! [`Defaults`](crate::resolve::Defaults) value. This module produces that
//! value from a TOML file so CLI and pipeline callers share one format.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [images]
//! background_color = "transparent"  # CSS color behind wrapper/placeholder
//! lqip = true                       # request low-quality placeholders
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::resolve::Defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Image resolution defaults.
    pub images: ImagesConfig,
}

/// Image resolution defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Default background color; `None` means `"transparent"`.
    pub background_color: Option<String>,
    /// Whether low-quality placeholders are requested by default.
    pub lqip: bool,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            lqip: true,
        }
    }
}

impl SiteConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load a config file, falling back to stock defaults when the file
    /// does not exist. Parse errors still fail.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The resolver's explicit defaults, as resolved scalars.
    pub fn image_defaults(&self) -> Defaults {
        Defaults {
            background_color: self.images.background_color.clone(),
            lqip: self.images.lqip,
        }
    }
}

/// A documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    "\
# lazy-image site configuration.
# All options are optional - the values below are the stock defaults.

[images]
# CSS color shown behind the wrapper and placeholder while the main
# image loads. Any CSS color value works; \"\" disables it entirely.
background_color = \"transparent\"

# Request low-quality image placeholders from the image source.
lqip = true
"
    .to_string()
}
