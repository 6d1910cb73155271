// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::calendar::{ParityCalculator, ParityPolicy};
use crate::error::{Error, Result};
use crate::model::{Parity, Subgroup};
use crate::specs::ParseOptions;

/// Everything a run needs, passed down explicitly.
/// Layering: built-in defaults ← `kai_week.toml` ← CLI flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub schedule: ScheduleOptions,
    pub store: StoreOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceOptions {
    pub url: String,
    pub timeout_secs: u64,
    /// Skip the network and answer from the previous snapshot.
    pub offline: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            timeout_secs: TIMEOUT_SECS,
            offline: false,
        }
    }
}

impl SourceOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleOptions {
    pub subgroup: u8,
    /// Parity of even ISO weeks.
    pub parity: Parity,
    pub parity_policy: ParityPolicy,
    pub include_details: bool,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            subgroup: DEFAULT_SUBGROUP,
            parity: Parity::First,
            parity_policy: ParityPolicy::IsoWeek,
            include_details: false,
        }
    }
}

impl ScheduleOptions {
    pub fn subgroup(&self) -> Subgroup {
        Subgroup::Group(self.subgroup)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions { include_details: self.include_details }
    }

    pub fn calculator(&self) -> ParityCalculator {
        ParityCalculator::new(self.parity, self.parity_policy)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    pub dir: PathBuf,
    pub previous_file: String,
    pub current_file: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            previous_file: s!(PREVIOUS_FILE),
            current_file: s!(CURRENT_FILE),
        }
    }
}

impl AppOptions {
    /// Explicit `path` must exist; otherwise `kai_week.toml` is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = fs::read_to_string(&path)?;
        let opts = Self::from_toml(&text).map_err(|source| Error::ConfigFile { path: path.clone(), source })?;
        logd!("Loaded config from {}", path.display());
        Ok(opts)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.schedule.subgroup == 0 {
            return Err(Error::Config(s!("subgroup must be 1 or greater")));
        }
        if self.source.url.trim().is_empty() {
            return Err(Error::Config(s!("source url is empty")));
        }
        if self.store.previous_file == self.store.current_file {
            return Err(Error::Config(s!("previous and current snapshot files must differ")));
        }
        Ok(())
    }
}
