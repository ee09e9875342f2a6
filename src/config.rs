use crate::constants::{DEFAULT_MAX_CYLINDER, DEFAULT_REQUESTS_FILE};
use crate::error::{Result, SchedulerError};
use crate::scheduler::{Cylinder, validate_disk_size};
use std::{env, path::PathBuf};

pub const ENV_REQUESTS_FILE: &str = "DISK_SCHEDULING_REQUESTS_FILE";
pub const ENV_MAX_CYLINDER: &str = "DISK_SCHEDULING_MAX_CYLINDER";
pub const ENV_OUTPUT_DIR: &str = "DISK_SCHEDULING_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub requests_file: PathBuf,
    pub max_cylinder: Cylinder,
    /// Where the CSV report goes. No report is written when unset.
    pub output_dir: Option<PathBuf>,
}

/// Values given on the command line. Each one set here wins over its
/// environment variable, which is then not read at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub requests_file: Option<PathBuf>,
    pub max_cylinder: Option<Cylinder>,
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            requests_file: PathBuf::from(DEFAULT_REQUESTS_FILE),
            max_cylinder: DEFAULT_MAX_CYLINDER,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(ConfigOverrides::default())
    }

    /// Environment config with command line values layered on top
    pub fn from_env_with(overrides: ConfigOverrides) -> Result<Self> {
        Self::from_lookup_with(overrides, |key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with(ConfigOverrides::default(), lookup)
    }

    /// Like `from_lookup`, but a key is only looked up when `overrides` leaves it unset.
    pub fn from_lookup_with<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value_of = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        match overrides.requests_file {
            Some(path) => config.requests_file = path,
            None => {
                if let Some(path) = value_of(ENV_REQUESTS_FILE) {
                    config.requests_file = PathBuf::from(path.trim());
                }
            }
        }

        match overrides.max_cylinder {
            Some(max_cylinder) => config.max_cylinder = max_cylinder,
            None => {
                if let Some(raw) = value_of(ENV_MAX_CYLINDER) {
                    config.max_cylinder = parse_max_cylinder(&raw)?;
                }
            }
        }

        match overrides.output_dir {
            Some(dir) => config.output_dir = Some(dir),
            None => {
                if let Some(dir) = value_of(ENV_OUTPUT_DIR) {
                    config.output_dir = Some(PathBuf::from(dir.trim()));
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_disk_size(self.max_cylinder)?;

        // If the path already exists but is not a directory, reject early.
        if let Some(dir) = &self.output_dir
            && dir.exists()
            && !dir.is_dir()
        {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "Output path is not a directory: {}",
                dir.display()
            )));
        }
        Ok(())
    }
}

fn parse_max_cylinder(raw: &str) -> Result<Cylinder> {
    raw.trim().parse().map_err(|e| {
        SchedulerError::InvalidConfiguration(format!(
            "{ENV_MAX_CYLINDER} must be an integer, got '{raw}': {e}"
        ))
    })
}
