use std::{collections::HashMap, fs};

use anyhow::Context;
use url::Url;

#[derive(Debug)]
pub struct Settings {
    pub catalog_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_base_url: catalog::DEFAULT_BASE_URL.into(),
        }
    }
}

/// Defaults, overridden by an optional `app.toml`, overridden by the
/// environment. The base address of the remote catalog is the only
/// configurable behavior.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("app.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("catalog_base_url") {
                settings.catalog_base_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("CATALOG_BASE_URL") {
        settings.catalog_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__CATALOG_BASE_URL") {
        settings.catalog_base_url = v;
    }

    settings.catalog_base_url = normalize_base_url(&settings.catalog_base_url);
    settings
}

pub fn validate_base_url(raw: &str) -> anyhow::Result<()> {
    Url::parse(raw).with_context(|| format!("invalid catalog base url '{raw}'"))?;
    Ok(())
}

fn normalize_base_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return Settings::default().catalog_base_url;
    }
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://pokeapi.co/api/v2/"),
            "https://pokeapi.co/api/v2"
        );
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        assert_eq!(normalize_base_url("   "), catalog::DEFAULT_BASE_URL);
    }

    #[test]
    fn default_base_url_is_valid() {
        validate_base_url(&Settings::default().catalog_base_url).expect("valid");
    }

    #[test]
    fn rejects_garbage_urls() {
        assert!(validate_base_url("not a url").is_err());
    }
}
