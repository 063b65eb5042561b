use log::info;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::AedisError,
    gui::table::pagination::{
        normalize_page_size,
        DEFAULT_PAGE_SIZE,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";

/// Overrides `api_url` for the session without touching the saved file.
pub const API_URL_ENV: &str = "AEDIS_API_URL";

pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbwO-qr8Qf_mLnia1BzbCdqvj9kbmYiK5ee3tcz_FpCVkg0-05L1Jc-57leJPAKlDNxr/exec";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_url: String,
    pub items_per_page: usize,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            items_per_page: DEFAULT_PAGE_SIZE,
            dark_mode: false,
        }
    }
}

impl SettingsData {
    /// Saved settings with the environment override applied.
    pub fn load() -> Self {
        load_json_or_default::<SettingsData>(SETTINGS_FILE)
            .resolved(std::env::var(API_URL_ENV).ok())
    }

    pub fn save(&self) -> Result<(), AedisError> {
        save_json(self, SETTINGS_FILE)
    }

    /// Normalizes persisted values. A non-empty `api_url_override` wins over
    /// the saved URL, and an empty saved URL falls back to the default.
    pub fn resolved(mut self, api_url_override: Option<String>) -> Self {
        self.items_per_page = normalize_page_size(self.items_per_page);

        match api_url_override.map(|url| url.trim().to_string()).filter(|url| !url.is_empty()) {
            Some(url) => {
                info!("Using member store URL from {}", API_URL_ENV);
                self.api_url = url;
            }
            None if self.api_url.trim().is_empty() => {
                self.api_url = DEFAULT_API_URL.to_string();
            }
            None => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::persistence::{
        load_json_at,
        save_json_at,
    };

    #[test]
    fn test_defaults() {
        let settings = SettingsData::default();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.items_per_page, 10);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        let settings = SettingsData { items_per_page: 7, ..SettingsData::default() }.resolved(None);
        assert_eq!(settings.items_per_page, 10);

        let settings = SettingsData { items_per_page: 50, ..SettingsData::default() }.resolved(None);
        assert_eq!(settings.items_per_page, 50);
    }

    #[test]
    fn test_api_url_override() {
        let saved = SettingsData { api_url: "https://saved".to_string(), ..SettingsData::default() };

        let settings = saved.clone().resolved(Some(" https://env ".to_string()));
        assert_eq!(settings.api_url, "https://env");

        let settings = saved.clone().resolved(Some("   ".to_string()));
        assert_eq!(settings.api_url, "https://saved");

        let blank = SettingsData { api_url: String::new(), ..SettingsData::default() };
        assert_eq!(blank.resolved(None).api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{ "dark_mode": true }"#).unwrap();

        let settings: SettingsData = load_json_at(&path).unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.items_per_page, 10);
        assert_eq!(settings.api_url, DEFAULT_API_URL);

        let changed = SettingsData { items_per_page: 20, ..settings };
        save_json_at(&changed, &path).unwrap();
        let reloaded: SettingsData = load_json_at(&path).unwrap();
        assert_eq!(reloaded, changed);
    }
}
