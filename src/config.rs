use crate::ui::Theme;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Language preference
    pub preferences_path: PathBuf,
    pub browser_language: Option<String>,

    // Presentation
    pub theme: Theme,

    // Security (protects the i18n diagnostics endpoints when set)
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid port number")?,

            // Language preference
            preferences_path: std::env::var("PREFERENCES_PATH")
                .unwrap_or_else(|_| "data/preferences.json".to_string())
                .into(),
            browser_language: std::env::var("BROWSER_LANGUAGE")
                .or_else(|_| std::env::var("LANG"))
                .ok()
                .filter(|v| !v.trim().is_empty()),

            // Presentation
            theme: match std::env::var("THEME") {
                Ok(value) => Theme::from_str_value(&value).context("Invalid THEME")?,
                Err(_) => Theme::default(),
            },

            // Security
            api_key: std::env::var("API_KEY").ok().filter(|v| !v.is_empty()),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "HOST",
        "PORT",
        "PREFERENCES_PATH",
        "BROWSER_LANGUAGE",
        "LANG",
        "THEME",
        "API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.preferences_path, PathBuf::from("data/preferences.json"));
        assert_eq!(config.browser_language, None);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.api_key, None);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("LANG", "de_DE.UTF-8");
        std::env::set_var("THEME", "light");
        std::env::set_var("API_KEY", "secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.browser_language.as_deref(), Some("de_DE.UTF-8"));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_browser_language_takes_precedence_over_lang() {
        clear_env();
        std::env::set_var("BROWSER_LANGUAGE", "ja-JP");
        std::env::set_var("LANG", "fr_FR.UTF-8");

        let config = Config::from_env().unwrap();
        assert_eq!(config.browser_language.as_deref(), Some("ja-JP"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_socket_addr() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }
}
