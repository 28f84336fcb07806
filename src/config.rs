//! TOML configuration.
//!
//! Every key is optional. A missing file at the default location means
//! "use defaults"; a path given explicitly must exist.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;
use crate::document::parse_class_selector;

pub const CONFIG_FILE_NAME: &str = "carousel.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub autoplay: bool,
    pub interval_ms: u64,
    pub restart_on_interaction: bool,
    pub slide_selector: String,
    pub indicator_selector: String,
    pub active_class: String,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: AUTOPLAY_INTERVAL_MS,
            restart_on_interaction: false,
            slide_selector: SLIDE_SELECTOR.to_string(),
            indicator_selector: INDICATOR_SELECTOR.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Config {
    /// Loads `explicit` if given, otherwise `carousel.toml` in the working
    /// directory when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms < MIN_INTERVAL_MS {
            return Err(ConfigError::Invalid {
                key: "interval_ms",
                reason: format!("{} is below the minimum of {}", self.interval_ms, MIN_INTERVAL_MS),
            });
        }
        let slide_classes = class_selector("slide_selector", &self.slide_selector)?;
        let indicator_classes = class_selector("indicator_selector", &self.indicator_selector)?;

        // Overlapping selectors would make slides count as indicators or the reverse
        let covers = |a: &Vec<&str>, b: &Vec<&str>| a.iter().all(|x| b.iter().any(|y| x == y));
        if covers(&slide_classes, &indicator_classes) || covers(&indicator_classes, &slide_classes) {
            return Err(ConfigError::Invalid {
                key: "indicator_selector",
                reason: format!(
                    "{:?} and slide selector {:?} match the same elements",
                    self.indicator_selector, self.slide_selector
                ),
            });
        }

        // Clearing the active class must never strip a selector class
        let active_selector = format!(".{}", self.active_class);
        let active = parse_class_selector(&active_selector);
        let single = active.as_ref().is_some_and(|classes| classes.len() == 1);
        if !single {
            return Err(ConfigError::Invalid {
                key: "active_class",
                reason: format!("{:?} is not a single class name", self.active_class),
            });
        }
        let active = self.active_class.as_str();
        if slide_classes.iter().chain(&indicator_classes).any(|class| *class == active) {
            return Err(ConfigError::Invalid {
                key: "active_class",
                reason: format!("{:?} is also used by a selector", self.active_class),
            });
        }

        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::Invalid {
                key: "window_width/window_height",
                reason: format!("{}x{} is not a usable size", self.window_width, self.window_height),
            });
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn class_selector<'a>(key: &'static str, selector: &'a str) -> Result<Vec<&'a str>, ConfigError> {
    parse_class_selector(selector).ok_or_else(|| ConfigError::Invalid {
        key,
        reason: format!("{:?} is not a class selector like \".name\" or \".a.b\"", selector),
    })
}
