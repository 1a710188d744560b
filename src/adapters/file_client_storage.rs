use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::interfaces::ports::ClientStorage;
use crate::global_constants;

/// Key-value storage persisted as a flat JSON object on disk.
///
/// Without a platform config directory every read and write fails, which
/// callers treat like any other storage error.
pub struct FileClientStorage {
    settings_path: Option<PathBuf>,
    write_lock: Mutex<()>,
}

impl FileClientStorage {
    pub fn new() -> Self {
        Self::in_config_dir(dirs::config_dir())
    }

    pub fn in_config_dir(config_dir: Option<PathBuf>) -> Self {
        let settings_path = config_dir.map(|dir| {
            dir.join(global_constants::CONFIG_DIR_NAME)
                .join(global_constants::SETTINGS_FILE_NAME)
        });

        if settings_path.is_none() {
            log::warn!("[STORAGE] Could not find config directory, settings will not persist");
        }

        Self {
            settings_path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn at_path(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: Some(settings_path.into()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    fn require_settings_path(&self) -> Result<&Path> {
        self.settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))
    }

    fn load(&self) -> Result<Map<String, Value>> {
        let settings_path = self.require_settings_path()?;
        if !settings_path.exists() {
            log::debug!("[STORAGE] No settings file at {:?}", settings_path);
            return Ok(Map::new());
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read {:?}", settings_path))?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&contents)
            .with_context(|| format!("Settings file {:?} is not a JSON object", settings_path))
    }

    fn save(&self, items: &Map<String, Value>) -> Result<()> {
        let settings_path = self.require_settings_path()?;
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(items)?;
        std::fs::write(settings_path, contents)
            .with_context(|| format!("Failed to write {:?}", settings_path))?;

        log::info!("[STORAGE] Saved settings to {:?}", settings_path);
        Ok(())
    }
}

impl Default for FileClientStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStorage for FileClientStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.load()?;

        Ok(items.get(key).map(|value| match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut items = self.load()?;
        items.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&items)?;

        log::debug!("[STORAGE] Stored {}", key);
        Ok(())
    }
}
