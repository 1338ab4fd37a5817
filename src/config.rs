use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::catalog;
use crate::error::{SampleError, SampleResult};

// =============================================================================
// Tour configuration, read from TOML
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub color: bool,
    /// Sample ids to run; empty means every sample.
    pub samples: Vec<String>,
    pub max_finder: MaxFinderConfig,
    pub greeting: GreetingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaxFinderConfig {
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingConfig {
    pub name: String,
    pub date: NaiveDate,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            color: true,
            samples: Vec::new(),
            max_finder: MaxFinderConfig::default(),
            greeting: GreetingConfig::default(),
        }
    }
}

impl Default for MaxFinderConfig {
    fn default() -> Self {
        MaxFinderConfig {
            values: vec![3, 6, 2, 8, 4],
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        GreetingConfig {
            name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> SampleResult<Self> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SampleResult<Self> {
        debug!("loading tour config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| SampleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> SampleResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Only checks sample ids; sample inputs are checked by the samples
    /// themselves when they run.
    pub fn validate(&self) -> SampleResult<()> {
        for id in &self.samples {
            catalog::find(id)?;
        }
        Ok(())
    }
}
