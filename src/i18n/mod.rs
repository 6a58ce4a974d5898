//! Localization support.
//!
//! - [`Locale`] - language/country/variant identifier with fallback chain
//! - [`Localized`] - a value resolved per locale, with fallback
//! - [`LocalizedMap`] - map-backed [`Localized`] implementation
//!
//! The process default locale used by [`Localized::get`] is read lazily from
//! [`Settings`](crate::config::Settings) and can be replaced at runtime with
//! [`set_default_locale`].

mod locale;
mod localized;

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::config::{Settings, DEFAULT_LOCALE_TAG};

pub use locale::Locale;
pub use localized::{Localized, LocalizedMap, LocalizedSupplier};

static DEFAULT_LOCALE: Lazy<RwLock<Locale>> = Lazy::new(|| RwLock::new(configured_locale()));

/// Default locale from settings, or `en` if settings can't be loaded.
fn configured_locale() -> Locale {
    let fallback = || Locale::new(DEFAULT_LOCALE_TAG).unwrap_or_default();
    match Settings::load() {
        Ok(settings) => settings.default_locale().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Invalid default locale in settings, using '{}'", DEFAULT_LOCALE_TAG);
            fallback()
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Could not load settings, using '{}'", DEFAULT_LOCALE_TAG);
            fallback()
        }
    }
}

/// The process default locale.
pub fn default_locale() -> Locale {
    DEFAULT_LOCALE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the process default locale, returning the previous one.
pub fn set_default_locale(locale: Locale) -> Locale {
    let mut current = DEFAULT_LOCALE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let previous = std::mem::replace(&mut *current, locale);
    tracing::debug!(locale = %current, previous = %previous, "Default locale changed");
    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_set_default_locale_returns_previous() {
        let original = set_default_locale(Locale::new("fr").unwrap());
        assert_eq!(default_locale(), Locale::new("fr").unwrap());

        let previous = set_default_locale(original.clone());
        assert_eq!(previous, Locale::new("fr").unwrap());
        assert_eq!(default_locale(), original);
    }

    #[test]
    #[serial]
    fn test_localized_get_uses_default_locale() {
        let map = LocalizedMap::new("Hello").with(Locale::new("es").unwrap(), "Hola");

        let original = set_default_locale(Locale::with_country("es", "ES").unwrap());
        assert_eq!(map.get().unwrap(), "Hola");

        set_default_locale(Locale::new("de").unwrap());
        assert_eq!(map.get().unwrap(), "Hello");

        set_default_locale(original);
    }
}
