//! Formatter settings (`[formatter]` table of the settings file).
//!
//! The settings file is `~/.config/redump-report/settings.toml`. Other
//! tables in the file belong to other tools and are left untouched when the
//! formatter settings are saved.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::disc_type::ThresholdProfile;
use crate::error::SettingsError;

/// Options controlling how a report is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterSettings {
    /// Leave out fields the database fills in by itself.
    pub enable_redump_compatibility: bool,
    /// Which Blu-ray size thresholds to classify with.
    pub bluray_thresholds: ThresholdProfile,
    /// Resolve the tier-specific disc type before formatting.
    pub normalize_disc_type: bool,
    /// Fold special-field maps into comments/contents before formatting.
    pub process_special_fields: bool,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            enable_redump_compatibility: true,
            bluray_thresholds: ThresholdProfile::Primary,
            normalize_disc_type: true,
            process_special_fields: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    formatter: FormatterSettings,
}

impl FormatterSettings {
    /// Parse the `[formatter]` table out of a settings document.
    ///
    /// A document without the table yields the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = toml::from_str(contents)?;
        Ok(file.formatter)
    }
}

/// Canonical path to the settings file: `~/.config/redump-report/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("redump-report").join("settings.toml")
}

/// Read formatter settings from `path`.
pub fn load_settings_from(path: &Path) -> Result<FormatterSettings, SettingsError> {
    let contents = std::fs::read_to_string(path)?;
    FormatterSettings::from_toml_str(&contents)
}

/// Read formatter settings from the canonical path.
///
/// A missing file silently yields the defaults; an unreadable or invalid
/// one is logged and also yields the defaults.
pub fn load_settings() -> FormatterSettings {
    let path = settings_path();
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(e) if e.is_not_found() => {
            log::debug!("No settings file at {}, using defaults", path.display());
            FormatterSettings::default()
        }
        Err(e) => {
            log::warn!("Ignoring settings file {}: {}", path.display(), e);
            FormatterSettings::default()
        }
    }
}

/// Save formatter settings into the `[formatter]` table at `path`.
///
/// Works on a `toml::Value` so tables owned by other tools survive, and
/// writes through a temporary file so a crash never leaves a torn file.
pub fn save_settings_to(path: &Path, settings: &FormatterSettings) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse()?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(e.into()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::invalid("settings root is not a table"))?;
    table.insert("formatter".to_string(), toml::Value::try_from(settings)?);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Save formatter settings to the canonical path.
pub fn save_settings(settings: &FormatterSettings) -> Result<(), SettingsError> {
    save_settings_to(&settings_path(), settings)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
