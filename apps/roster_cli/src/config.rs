use std::{collections::HashMap, fs, path::Path};

use client_core::{Endpoints, DEFAULT_ORDER_PATH, DEFAULT_TOGGLE_PATH};
use roster_page::Locale;

pub const DEFAULT_SETTINGS_FILE: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub order_path: String,
    pub toggle_path: String,
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            order_path: DEFAULT_ORDER_PATH.into(),
            toggle_path: DEFAULT_TOGGLE_PATH.into(),
            locale: Locale::Ko,
        }
    }
}

impl Settings {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            order_path: self.order_path.clone(),
            toggle_path: self.toggle_path.clone(),
        }
    }
}

/// Defaults, then the settings file (if readable), then the environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            tracing::warn!("ignoring unreadable settings file: {err}");
            return;
        }
    };

    if let Some(v) = file_cfg.get("server_url") {
        settings.server_url = v.clone();
    }
    if let Some(v) = file_cfg.get("order_path") {
        settings.order_path = v.clone();
    }
    if let Some(v) = file_cfg.get("toggle_path") {
        settings.toggle_path = v.clone();
    }
    if let Some(v) = file_cfg.get("locale") {
        settings.locale = parse_locale(v);
    }
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("ROSTER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = var("APP__ORDER_PATH") {
        settings.order_path = v;
    }
    if let Some(v) = var("APP__TOGGLE_PATH") {
        settings.toggle_path = v;
    }

    if let Some(v) = var("APP__LOCALE") {
        settings.locale = parse_locale(&v);
    }
}

fn parse_locale(raw: &str) -> Locale {
    raw.parse().unwrap_or_else(|err| {
        tracing::warn!("{err}; falling back to {:?}", Locale::default());
        Locale::default()
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
