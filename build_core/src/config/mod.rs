//! Configuration - tunable damage constants loaded from TOML

mod constants;

pub use constants::{
    constants, constants_initialized, init_constants, init_constants_default, DamageConstants,
    DefenseConstants, ResistanceConstants,
};

use crate::ConfigError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read and parse a TOML file
pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        error: e,
        path: path.to_path_buf(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        error: e,
        path: Some(path.to_path_buf()),
    })
}

/// Parse a TOML string
pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
        error: e,
        path: None,
    })
}
