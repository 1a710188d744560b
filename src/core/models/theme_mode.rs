use serde::{Deserialize, Serialize};
use std::fmt;

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_storage_value(&self) -> &'static str {
        match self {
            ThemeMode::Dark => global_constants::THEME_VALUE_DARK,
            ThemeMode::Light => global_constants::THEME_VALUE_LIGHT,
        }
    }

    /// Any saved value other than `"dark"` means light; nothing saved, or an
    /// empty value, means dark.
    pub fn from_saved_value(saved: Option<&str>) -> Self {
        match saved {
            None | Some("") => ThemeMode::default(),
            Some(value) if value == global_constants::THEME_VALUE_DARK => ThemeMode::Dark,
            Some(_) => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Dark
    }
}
