use std::{collections::HashMap, fs};

use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

/// Resolves the backend base URL once at startup: `babyvision.toml`, then
/// environment, then the local development default. Both flows receive the
/// same immutable result.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("babyvision.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_url") {
                settings.api_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("BABYVISION_API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_url = v;
    }

    settings
}

/// Display-only homepage link derived from the backend URL. Hosted preview
/// deployments embed a `-<token>.` segment in their hostname; everything else
/// falls back to the backend origin.
pub fn homepage_url(api_url: &str) -> String {
    if let Some(token) = preview_token(api_url) {
        return format!("https://{token}.previewer.live");
    }

    match Url::parse(api_url) {
        Ok(url) => {
            let origin = url.origin();
            if origin.is_tuple() {
                origin.ascii_serialization()
            } else {
                api_url.to_string()
            }
        }
        Err(_) => api_url.to_string(),
    }
}

/// First `-<token>.` run of lowercase alphanumerics in the URL, if any.
fn preview_token(api_url: &str) -> Option<&str> {
    for (start, _) in api_url.match_indices('-') {
        let rest = &api_url[start + 1..];
        let end = rest
            .find(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
            .unwrap_or(rest.len());
        if end > 0 && rest[end..].starts_with('.') {
            return Some(&rest[..end]);
        }
    }
    None
}
