use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;

use crate::core::interfaces::ports::ClientStorage;
use crate::core::models::ThemeMode;
use crate::global_constants;

pub struct ThemeService {
    storage: Arc<dyn ClientStorage>,
    current: Mutex<ThemeMode>,
}

impl ThemeService {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self {
            storage,
            current: Mutex::new(ThemeMode::default()),
        }
    }

    pub fn current_theme(&self) -> ThemeMode {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_dark(&self) -> bool {
        self.current_theme().is_dark()
    }

    /// Reads the saved preference once. Unreadable storage falls back to dark.
    pub fn init_theme(&self) -> ThemeMode {
        let theme = match self.storage.get_item(global_constants::THEME_STORAGE_KEY) {
            Ok(saved) => ThemeMode::from_saved_value(saved.as_deref()),
            Err(error) => {
                log::warn!("[THEME] Failed to read saved theme, using dark: {}", error);
                ThemeMode::Dark
            }
        };

        if let Err(error) = self.apply_theme(theme) {
            log::warn!("[THEME] Failed to persist initial theme: {}", error);
        }

        log::info!("[THEME] Initialized theme: {}", theme);
        theme
    }

    pub fn set_theme(&self, theme: ThemeMode) -> Result<()> {
        self.apply_theme(theme)
    }

    pub fn toggle_theme(&self) -> Result<ThemeMode> {
        let toggled = self.current_theme().toggled();
        self.apply_theme(toggled)?;
        Ok(toggled)
    }

    fn apply_theme(&self, theme: ThemeMode) -> Result<()> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = theme;
        self.storage
            .set_item(global_constants::THEME_STORAGE_KEY, theme.as_storage_value())?;
        log::debug!("[THEME] Applied theme: {}", theme);
        Ok(())
    }
}
