use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::PersistentStore;

pub const SETTINGS_STORAGE_KEY: &str = "nyg-settings";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    #[serde(rename = "spring-festival")]
    SpringFestival,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

/// Global user preferences.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub theme: Theme,
    pub animations: bool,
    pub language: Language,
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sound_enabled: true,
            theme: Theme::default(),
            animations: true,
            language: Language::default(),
            auto_save: true,
        }
    }
}

fn field<T: DeserializeOwned>(document: &Value, name: &str) -> Option<T> {
    let value = document.get(name)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!(target: "settings", "Ignoring stored {}: {}", name, e);
            None
        }
    }
}

impl Settings {
    pub fn load(store: &PersistentStore) -> Self {
        let document = store.load(SETTINGS_STORAGE_KEY, Value::Null);
        Self::reconcile(&document)
    }

    /// Takes each field from `document` when present and well-formed, else its default.
    pub fn reconcile(document: &Value) -> Self {
        let defaults = Settings::default();
        Settings {
            sound_enabled: field(document, "soundEnabled").unwrap_or(defaults.sound_enabled),
            theme: field(document, "theme").unwrap_or(defaults.theme),
            animations: field(document, "animations").unwrap_or(defaults.animations),
            language: field(document, "language").unwrap_or(defaults.language),
            auto_save: field(document, "autoSave").unwrap_or(defaults.auto_save),
        }
    }

    pub fn save(&self, store: &PersistentStore) -> bool {
        store.save(SETTINGS_STORAGE_KEY, self)
    }

    /// Saves only while autosave is on.
    pub fn persist(&self, store: &PersistentStore) -> bool {
        self.auto_save && self.save(store)
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_animations(&mut self) {
        self.animations = !self.animations;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_auto_save(&mut self, enabled: bool) {
        self.auto_save = enabled;
    }

    pub fn reset(&mut self) {
        *self = Settings::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "soundEnabled": true,
                "theme": "spring-festival",
                "animations": true,
                "language": "zh-CN",
                "autoSave": true
            })
        );
    }

    #[test]
    fn test_reconcile_per_field() {
        let settings = Settings::reconcile(&json!({
            "soundEnabled": false,
            "theme": "neon",
            "language": "en-US",
            "autoSave": "yes"
        }));

        assert!(!settings.sound_enabled);
        assert_eq!(settings.theme, Theme::SpringFestival);
        assert!(settings.animations);
        assert_eq!(settings.language, Language::EnUs);
        assert!(settings.auto_save);
    }

    #[test]
    fn test_reconcile_non_object() {
        assert_eq!(Settings::reconcile(&json!([1, 2])), Settings::default());
        assert_eq!(Settings::reconcile(&Value::Null), Settings::default());
    }

    #[test]
    fn test_persist_respects_auto_save() {
        let store = PersistentStore::in_memory();
        let mut settings = Settings::default();
        settings.set_theme(Theme::Dark);
        assert!(settings.persist(&store));

        settings.set_auto_save(false);
        settings.set_theme(Theme::Light);
        assert!(!settings.persist(&store));
        assert_eq!(Settings::load(&store).theme, Theme::Dark);
    }
}
