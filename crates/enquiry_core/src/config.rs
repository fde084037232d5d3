use std::{collections::HashMap, fs};

use url::Url;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8443/enquiries".into(),
        }
    }
}

/// Process-wide configuration, read once at startup: defaults, then an
/// optional `enquiry.toml` in the working directory, then environment
/// overrides. A bad value is not rejected here; it surfaces as a
/// submission error on the first attempt.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("enquiry.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_url = v;
    }

    settings.api_url = normalize_api_url(&settings.api_url);
    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("api_url") {
            settings.api_url = v.clone();
        }
    }
}

fn normalize_api_url(raw: &str) -> String {
    let raw = raw.trim();

    if raw.is_empty() {
        return Settings::default().api_url;
    }

    if raw.contains("://") {
        return raw.to_string();
    }

    let prefixed = format!("http://{raw}");
    match Url::parse(&prefixed) {
        Ok(_) => prefixed,
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
