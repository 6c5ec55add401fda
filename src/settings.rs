//! Application settings
//!
//! Settings are stored as a flat map from keys like `app/last_zoom_level` to
//! JSON values. A `Setting<T>` pairs a key with its default value, and the
//! `SettingValue` trait converts typed values to and from their stored form.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use crate::models::player::MIDI_PRESET_ACOUSTIC_GUITAR_STEEL;
use crate::models::Tuning;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for setting '{key}'")]
    InvalidValue { key: String },
}

/// Conversion between a typed setting and its stored JSON form
pub trait SettingValue: Sized {
    fn to_value(&self) -> Value;
    fn from_value(value: &Value) -> Option<Self>;
}

impl SettingValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl SettingValue for i32 {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|v| i32::try_from(v).ok())
    }
}

impl SettingValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl SettingValue for Vec<String> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().cloned().map(Value::String).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }
}

/// Stored as `"name offset sharps count n1 n2 ..."`, e.g. `"Standard 0 1 6 64 59 55 50 45 40"`.
/// The name may contain spaces; runs of whitespace in it read back as one space.
impl SettingValue for Tuning {
    fn to_value(&self) -> Value {
        let mut text = format!(
            "{} {} {} {}",
            self.name,
            self.music_notation_offset,
            u8::from(self.sharps),
            self.notes.len()
        );
        for note in &self.notes {
            text.push_str(&format!(" {}", note));
        }
        Value::String(text)
    }

    fn from_value(value: &Value) -> Option<Self> {
        let fields: Vec<&str> = value.as_str()?.split_whitespace().collect();

        // The name is however many leading words leave a well-formed tail
        (1..fields.len()).find_map(|name_len| {
            let (name, tail) = fields.split_at(name_len);
            parse_tuning_tail(&name.join(" "), tail)
        })
    }
}

fn parse_tuning_tail(name: &str, fields: &[&str]) -> Option<Tuning> {
    let [offset, sharps, count, notes @ ..] = fields else {
        return None;
    };

    let music_notation_offset = offset.parse().ok()?;
    let sharps = match *sharps {
        "1" | "true" => true,
        "0" | "false" => false,
        _ => return None,
    };
    let count: usize = count.parse().ok()?;
    if notes.len() != count {
        return None;
    }

    let notes = notes
        .iter()
        .map(|field| field.parse().ok())
        .collect::<Option<Vec<u8>>>()?;

    Some(Tuning {
        name: name.to_string(),
        music_notation_offset,
        sharps,
        notes,
    })
}

/// Color scheme for the score area
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScoreTheme {
    #[default]
    SystemDefault,
    Light,
    Dark,
}

impl ScoreTheme {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreTheme::Light => "light",
            ScoreTheme::Dark => "dark",
            ScoreTheme::SystemDefault => "default",
        }
    }
}

impl fmt::Display for ScoreTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SettingValue for ScoreTheme {
    fn to_value(&self) -> Value {
        Value::String(self.name().to_string())
    }

    // Unknown names fall back to the system default
    fn from_value(value: &Value) -> Option<Self> {
        Some(match value.as_str()? {
            "light" => ScoreTheme::Light,
            "dark" => ScoreTheme::Dark,
            _ => ScoreTheme::SystemDefault,
        })
    }
}

/// A settings key with its default value
#[derive(Clone, Debug, PartialEq)]
pub struct Setting<T> {
    pub key: &'static str,
    pub default: T,
}

impl<T> Setting<T> {
    pub const fn new(key: &'static str, default: T) -> Self {
        Self { key, default }
    }
}

pub const LAST_ZOOM_LEVEL: Setting<i32> = Setting::new("app/last_zoom_level", 100);
pub const OPEN_FILES_IN_NEW_WINDOW: Setting<bool> =
    Setting::new("app/open_files_in_new_window", false);
pub const SYSTEM_SPACING: Setting<i32> = Setting::new("app/system_spacing", 50);
pub const SCORE_THEME: Setting<ScoreTheme> =
    Setting::new("app/score_theme", ScoreTheme::SystemDefault);
pub const DEFAULT_INSTRUMENT_PRESET: Setting<i32> = Setting::new(
    "app/default_instrument_preset",
    MIDI_PRESET_ACOUSTIC_GUITAR_STEEL as i32,
);

lazy_static! {
    pub static ref PREVIOUS_DIRECTORY: Setting<String> =
        Setting::new("app/previous_directory", String::new());
    pub static ref RECENT_FILES: Setting<Vec<String>> =
        Setting::new("app/recent_files", Vec::new());
    pub static ref DEFAULT_INSTRUMENT_NAME: Setting<String> =
        Setting::new("app/default_instrument_name", "Untitled".to_string());
    pub static ref DEFAULT_TUNING: Setting<Tuning> =
        Setting::new("app/default_tuning", Tuning::default());
}

/// Key/value store backing all settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct SettingsTree {
    values: BTreeMap<String, Value>,
}

impl SettingsTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value for a setting, or its default when missing or unreadable
    pub fn get<T: SettingValue + Clone>(&self, setting: &Setting<T>) -> T {
        match self.values.get(setting.key) {
            Some(value) => T::from_value(value).unwrap_or_else(|| {
                log::warn!("Ignoring invalid value for setting '{}'", setting.key);
                setting.default.clone()
            }),
            None => setting.default.clone(),
        }
    }

    /// Stored value for a setting, failing when present but unreadable
    pub fn try_get<T: SettingValue + Clone>(&self, setting: &Setting<T>) -> Result<T, SettingsError> {
        match self.values.get(setting.key) {
            Some(value) => T::from_value(value).ok_or_else(|| SettingsError::InvalidValue {
                key: setting.key.to_string(),
            }),
            None => Ok(setting.default.clone()),
        }
    }

    pub fn set<T: SettingValue>(&mut self, setting: &Setting<T>, value: &T) {
        self.values.insert(setting.key.to_string(), value.to_value());
    }

    pub fn remove<T>(&mut self, setting: &Setting<T>) {
        self.values.remove(setting.key);
    }

    pub fn contains<T>(&self, setting: &Setting<T>) -> bool {
        self.values.contains_key(setting.key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read settings from a JSON file. A missing file gives an empty tree.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let tree: SettingsTree = serde_json::from_str(&content)?;
        log::info!("Loaded {} settings from {}", tree.values.len(), path.display());
        Ok(tree)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Saved {} settings to {}", self.values.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_when_missing() {
        let tree = SettingsTree::new();
        assert_eq!(tree.get(&LAST_ZOOM_LEVEL), 100);
        assert_eq!(tree.get(&SYSTEM_SPACING), 50);
        assert!(!tree.get(&OPEN_FILES_IN_NEW_WINDOW));
        assert_eq!(tree.get(&*DEFAULT_INSTRUMENT_NAME), "Untitled");
        assert_eq!(tree.get(&DEFAULT_INSTRUMENT_PRESET), 25);
        assert_eq!(tree.get(&SCORE_THEME), ScoreTheme::SystemDefault);
        assert!(tree.get(&*RECENT_FILES).is_empty());
    }

    #[test]
    fn test_tuning_string_form() {
        let value = Tuning::default().to_value();
        assert_eq!(value, json!("Standard 0 1 6 64 59 55 50 45 40"));

        let tuning = Tuning::from_value(&json!("Drop_D -1 0 6 64 59 55 50 45 38")).unwrap();
        assert_eq!(tuning.name, "Drop_D");
        assert_eq!(tuning.music_notation_offset, -1);
        assert!(!tuning.sharps);
        assert_eq!(tuning.notes, vec![64, 59, 55, 50, 45, 38]);
    }

    #[test]
    fn test_tuning_name_with_spaces_reloads() {
        let open_g = Tuning {
            name: "Open G".to_string(),
            music_notation_offset: 0,
            sharps: true,
            notes: vec![62, 59, 55, 50, 43, 38],
        };
        assert_eq!(open_g.to_value(), json!("Open G 0 1 6 62 59 55 50 43 38"));
        assert_eq!(Tuning::from_value(&open_g.to_value()), Some(open_g.clone()));

        let mut tree = SettingsTree::new();
        tree.set(&*DEFAULT_TUNING, &open_g);
        assert_eq!(tree.try_get(&*DEFAULT_TUNING).unwrap(), open_g);
    }

    #[test]
    fn test_malformed_tuning_is_rejected() {
        assert_eq!(Tuning::from_value(&json!("Standard 0 1 6 64 59")), None);
        assert_eq!(Tuning::from_value(&json!("Standard x 1 0")), None);
        assert_eq!(Tuning::from_value(&json!("Standard 0 1 2 64 59 55")), None);
        assert_eq!(Tuning::from_value(&json!(42)), None);
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(ScoreTheme::Dark.to_value(), json!("dark"));
        assert_eq!(ScoreTheme::SystemDefault.to_value(), json!("default"));
        assert_eq!(ScoreTheme::from_value(&json!("light")), Some(ScoreTheme::Light));
        assert_eq!(
            ScoreTheme::from_value(&json!("solarized")),
            Some(ScoreTheme::SystemDefault)
        );
    }

    #[test]
    fn test_invalid_value_falls_back_to_default() {
        let mut tree = SettingsTree::new();
        tree.values
            .insert(LAST_ZOOM_LEVEL.key.to_string(), json!("not a number"));

        assert_eq!(tree.get(&LAST_ZOOM_LEVEL), 100);
        assert!(matches!(
            tree.try_get(&LAST_ZOOM_LEVEL),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_set_and_remove() {
        let mut tree = SettingsTree::new();
        tree.set(&*RECENT_FILES, &vec!["a.pt2".to_string(), "b.pt2".to_string()]);
        assert!(tree.contains(&*RECENT_FILES));
        assert_eq!(tree.get(&*RECENT_FILES).len(), 2);

        tree.remove(&*RECENT_FILES);
        assert!(tree.is_empty());
    }
}
