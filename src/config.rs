// Configuration: where the record files live and how they are delimited.
// Only the data directory is configurable; file names and the delimiter are
// fixed so that files written by one run are always readable by the next.

use std::path::{Path, PathBuf};

/// Field separator in the persisted files. Names may never contain it.
pub const DELIMITER: char = '?';

pub const LOCATION_FILENAME: &str = "LocationData.txt";
pub const TRANSPORT_FILENAME: &str = "TransportData.txt";

/// Environment variable overriding the data directory.
pub const DATA_DIR_VAR: &str = "TRAVEL_PLANNER_DATA_DIR";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
}

impl Config {
    /// Build a config for an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Read the data directory from `TRAVEL_PLANNER_DATA_DIR`, or fall back
    /// to `~/.travel_planner` (or the current directory when there is no home).
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|home| home.join(".travel_planner"))
                    .unwrap_or_else(|| PathBuf::from("."))
            });
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn location_path(&self) -> PathBuf {
        self.data_dir.join(LOCATION_FILENAME)
    }

    pub fn transport_path(&self) -> PathBuf {
        self.data_dir.join(TRANSPORT_FILENAME)
    }
}
