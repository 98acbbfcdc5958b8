use crate::i18n::TextKey;
use anyhow::{bail, Result};
use std::fmt;

/// Color scheme. Only affects styling classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_str_value(value: &str) -> Result<Theme> {
        match value.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => bail!("Unknown theme: '{}' (expected 'dark' or 'light')", other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label of the switch, which names the theme it switches to.
    pub fn switch_label(&self) -> TextKey {
        match self {
            Theme::Dark => TextKey::HeaderLightMode,
            Theme::Light => TextKey::HeaderDarkMode,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
