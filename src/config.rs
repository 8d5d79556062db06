use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Groq model used when the config file does not name one
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
/// Preferred caption language when the config file does not name one
pub const DEFAULT_LANG: &str = "en";
/// Listen address when the config file does not name one
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
    pub default_lang: Option<String>,
    pub bind: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    pub fn model(&self) -> &str {
        self.default_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn lang(&self) -> &str {
        self.default_lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
default_model = "gpt-4o-mini"
default_lang = "es"
bind = "0.0.0.0:9000"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model(), "gpt-4o-mini");
        assert_eq!(config.lang(), "es");
        assert_eq!(config.bind(), "0.0.0.0:9000");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.lang(), DEFAULT_LANG);
        assert_eq!(config.bind(), DEFAULT_BIND);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(r#"default_lang = "fr""#).unwrap();
        assert_eq!(config.lang(), "fr");
        assert!(config.default_model.is_none());
        assert_eq!(config.model(), DEFAULT_MODEL);
    }
}
