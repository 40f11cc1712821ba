use crate::{KvsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which store implementation the driver constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    #[serde(rename = "memtable")]
    MemTable,
    #[serde(rename = "sharded")]
    Sharded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Naive,
    SharedQueue,
    Rayon,
}

impl FromStr for EngineKind {
    type Err = KvsError;

    fn from_str(s: &str) -> Result<EngineKind> {
        match s {
            "memtable" => Ok(EngineKind::MemTable),
            "sharded" => Ok(EngineKind::Sharded),
            other => Err(KvsError::InvalidConfig(format!(
                "unknown engine '{other}', expected 'memtable' or 'sharded'"
            ))),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::MemTable => write!(f, "memtable"),
            EngineKind::Sharded => write!(f, "sharded"),
        }
    }
}

impl FromStr for PoolKind {
    type Err = KvsError;

    fn from_str(s: &str) -> Result<PoolKind> {
        match s {
            "naive" => Ok(PoolKind::Naive),
            "shared_queue" => Ok(PoolKind::SharedQueue),
            "rayon" => Ok(PoolKind::Rayon),
            other => Err(KvsError::InvalidConfig(format!(
                "unknown thread pool '{other}', expected one of naive, shared_queue or rayon"
            ))),
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Naive => write!(f, "naive"),
            PoolKind::SharedQueue => write!(f, "shared_queue"),
            PoolKind::Rayon => write!(f, "rayon"),
        }
    }
}

/// Settings for the driver binary. The store itself takes none.
///
/// Every field is optional in the JSON file; missing ones fall back to
/// [`DriverConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub engine: EngineKind,
    pub thread_pool: PoolKind,
    pub workers: u32,
    pub keys: u32,
}

impl Default for DriverConfig {
    fn default() -> DriverConfig {
        DriverConfig {
            engine: EngineKind::MemTable,
            thread_pool: PoolKind::SharedQueue,
            workers: 8,
            keys: 1000,
        }
    }
}

impl DriverConfig {
    /// Parses the file without validating it, so command-line overrides can
    /// still correct a value before [`DriverConfig::validate`] runs.
    pub fn load(path: impl Into<PathBuf>) -> Result<DriverConfig> {
        let value = std::fs::read_to_string(path.into())?;
        let config: DriverConfig = serde_json::from_str(&value)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(KvsError::InvalidConfig(
                "workers must be at least 1".to_owned(),
            ));
        }
        if self.keys == 0 {
            return Err(KvsError::InvalidConfig("keys must be at least 1".to_owned()));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
