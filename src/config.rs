//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/metaprop/config.toml` (XDG) or platform config dir
//! 3. Project config: `.metaprop.toml`
//! 4. Environment variables: `METAPROP_*`, nested keys separated by `__`
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "es_ES"
//! ```
//!
//! The same value from the environment: `METAPROP_I18N__DEFAULT_LOCALE=es_ES`.

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::MetaError;
use crate::i18n::Locale;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub i18n: I18nSettings,
}

/// Localization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nSettings {
    /// Locale tag used by [`Localized::get`](crate::i18n::Localized::get)
    /// (e.g. "en", "es_ES").
    #[serde(default = "default_locale_tag")]
    pub default_locale: String,
}

/// Locale tag used when nothing is configured.
pub const DEFAULT_LOCALE_TAG: &str = "en";

fn default_locale_tag() -> String {
    DEFAULT_LOCALE_TAG.to_string()
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: default_locale_tag(),
        }
    }
}

impl Settings {
    /// Load settings with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The figment used by [`Settings::load`], exposed so callers can add
    /// their own providers on top.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            // Layer 1: User config
            .merge(Toml::file(Self::user_config_path()))
            // Layer 2: Project config
            .merge(Toml::file(".metaprop.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("METAPROP_").split("__"))
    }

    /// Extract settings from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(ConfigError::from)
    }

    /// Parse the configured default locale.
    pub fn default_locale(&self) -> Result<Locale, MetaError> {
        self.i18n.default_locale.parse()
    }

    /// User config path: ~/.config/metaprop/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("metaprop").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("metaprop").join("config.toml"))
            .unwrap_or_default()
    }
}
