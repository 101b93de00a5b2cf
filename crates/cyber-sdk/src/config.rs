// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration, loaded from a JSON file.
//!
//! Every field has a default, so a configuration file only needs to list the
//! settings it changes:
//!
//! ```json
//! { "window": { "title": "voxels", "width": 1024 }, "log_filter": "debug" }
//! ```

use cyber_infra::WindowConfig;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Top-level engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// The default `env_logger` filter, used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Whether pressing Escape closes the application.
    pub exit_on_escape: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_filter: "info".to_string(),
            exit_on_escape: true,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: None,
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source_error: e.to_string(),
        })?;

        Self::from_json(&contents).map_err(|e| match e {
            ConfigError::Parse { details, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                details,
            },
            other => other,
        })
    }

    /// Loads a configuration file if it exists.
    ///
    /// Returns `Ok(None)` when there is no file at `path`, leaving the fallback
    /// (and any logging about it) to the caller. A file that exists but cannot
    /// be read or parsed is still an error.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!(
                    "dimensions must be non-zero, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }
        Ok(())
    }
}

/// An error raised while loading an [`EngineConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        /// The path of the file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source_error: String,
    },
    /// The configuration is not valid JSON or has the wrong shape.
    Parse {
        /// The path of the file, if the configuration came from one.
        path: Option<PathBuf>,
        /// The parser's error message.
        details: String,
    },
    /// The configuration parsed but holds an unusable value.
    Invalid {
        /// The offending setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source_error } => {
                write!(
                    f,
                    "Failed to read configuration from '{}': {source_error}",
                    path.display()
                )
            }
            ConfigError::Parse {
                path: Some(path),
                details,
            } => {
                write!(
                    f,
                    "Failed to parse configuration '{}': {details}",
                    path.display()
                )
            }
            ConfigError::Parse {
                path: None,
                details,
            } => write!(f, "Failed to parse configuration: {details}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid configuration for '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
