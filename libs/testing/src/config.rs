//! Configuration for fakes.
//!
//! Test binaries usually build a [`FakeConfig`] directly; `from_env` exists so
//! a whole suite can be pointed at a shared seed file without code changes.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Result;
use azfake_resources::DeploymentExtended;
use tracing_subscriber::EnvFilter;

use crate::FixtureError;

/// Environment variable naming the deployment seed file.
pub const SEED_FILE_VAR: &str = "AZFAKE_SEED_FILE";

/// Environment variable holding the default log filter.
pub const LOG_LEVEL_VAR: &str = "AZFAKE_LOG_LEVEL";

/// Settings shared by the fakes in one test binary.
#[derive(Debug, Clone)]
pub struct FakeConfig {
    /// JSON file mapping deployment names to records.
    pub seed_file: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for FakeConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl FakeConfig {
    /// Load configuration from `AZFAKE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_file = lookup(SEED_FILE_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let log_level = lookup(LOG_LEVEL_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "info".to_string());
        // Reject bad directives here rather than silently logging nothing later.
        EnvFilter::try_new(&log_level)?;

        Ok(Self {
            seed_file,
            log_level,
        })
    }

    /// Read the seed file, if one is configured.
    pub fn load_seed(&self) -> Result<Option<HashMap<String, DeploymentExtended>>, FixtureError> {
        let Some(path) = &self.seed_file else {
            return Ok(None);
        };

        let file = File::open(path).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;

        let seed = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            FixtureError::Json {
                path: path.clone(),
                source,
            }
        })?;

        Ok(Some(seed))
    }

    /// Install the test tracing subscriber using this config's log level.
    pub fn init_tracing(&self) {
        crate::telemetry::init_test_tracing(&self.log_level);
    }
}
