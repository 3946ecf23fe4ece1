use crate::echo::Echo;
use crate::weapon::Weapon;
use crate::CatalogError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// TOML layout of one gear file
#[derive(Debug, Deserialize)]
struct GearFileConfig {
    #[serde(default)]
    weapons: Vec<WeaponEntry>,
    #[serde(default)]
    echoes: Vec<EchoEntry>,
}

#[derive(Debug, Deserialize)]
struct WeaponEntry {
    id: String,
    #[serde(flatten)]
    weapon: Weapon,
}

#[derive(Debug, Deserialize)]
struct EchoEntry {
    id: String,
    #[serde(flatten)]
    echo: Echo,
}

/// Named weapons and echoes, loaded from TOML files
#[derive(Debug, Default)]
pub struct GearCatalog {
    weapons: HashMap<String, Weapon>,
    echoes: HashMap<String, Echo>,
}

impl GearCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every gear file under a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.load_dir(dir)?;
        Ok(catalog)
    }

    /// Parse a single gear document
    pub fn parse_str(content: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.add_document(content, None)?;
        Ok(catalog)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), CatalogError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| CatalogError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            paths.push(entry.path());
        }
        // Stable order so duplicate-id errors always name the same file
        paths.sort();

        for path in paths {
            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        self.add_document(&content, Some(path.to_path_buf()))
    }

    fn add_document(&mut self, content: &str, path: Option<PathBuf>) -> Result<(), CatalogError> {
        let config: GearFileConfig = toml::from_str(content).map_err(|e| CatalogError::Parse {
            error: e,
            path: path.clone(),
        })?;

        let invalid = |message: String| CatalogError::Validation {
            message,
            path: path.clone(),
        };

        for entry in config.weapons {
            for (key, passive) in &entry.weapon.passive_stats {
                if !passive.is_valid() {
                    return Err(invalid(format!(
                        "weapon '{}' passive '{}' has min_stacks {} > max_stacks {}",
                        entry.id, key, passive.min_stacks, passive.max_stacks
                    )));
                }
            }
            if self.weapons.contains_key(&entry.id) {
                return Err(invalid(format!("duplicate weapon id '{}'", entry.id)));
            }
            self.weapons.insert(entry.id, entry.weapon);
        }

        for entry in config.echoes {
            if self.echoes.contains_key(&entry.id) {
                return Err(invalid(format!("duplicate echo id '{}'", entry.id)));
            }
            self.echoes.insert(entry.id, entry.echo);
        }

        Ok(())
    }

    /// Get a weapon by ID
    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    /// Get an echo by ID
    pub fn echo(&self, id: &str) -> Option<&Echo> {
        self.echoes.get(id)
    }

    /// List all weapon IDs
    pub fn weapon_ids(&self) -> impl Iterator<Item = &str> {
        self.weapons.keys().map(|s| s.as_str())
    }

    /// List all echo IDs
    pub fn echo_ids(&self) -> impl Iterator<Item = &str> {
        self.echoes.keys().map(|s| s.as_str())
    }
}
