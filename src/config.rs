use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::input::{InputError, ReadOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InputSettings {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputSettings {
    /// Inserted before the extension of filtered output files.
    #[serde(default = "default_filtered_suffix")]
    pub filtered_suffix: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            filtered_suffix: default_filtered_suffix(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_filtered_suffix() -> String {
    "seq".to_string()
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&text)?;
        settings.read_options(None)?;
        Ok(settings)
    }

    /// Effective read options, with `delimiter` overriding the file value.
    pub fn read_options(&self, delimiter: Option<char>) -> Result<ReadOptions, ConfigError> {
        let delimiter = delimiter.unwrap_or(self.input.delimiter);
        Ok(ReadOptions::with_delimiter(delimiter)?)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
