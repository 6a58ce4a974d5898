//! Localized values.

use std::collections::HashMap;

use crate::error::MetaError;
use crate::i18n::{default_locale, Locale};
use crate::predicate::Supplier;

/// A value that depends on the locale.
///
/// Localized values are never absent: if a localized value is optional, it is
/// the `Localized` itself that should be optional, not the value it returns.
pub trait Localized<T> {
    /// Returns the value for `locale`. If no value for that locale is found,
    /// the default value must be returned.
    ///
    /// # Errors
    ///
    /// [`MetaError::UnableToLocalize`] if the value cannot be produced.
    fn localize(&self, locale: &Locale) -> Result<T, MetaError>;

    /// Returns the value for the process default locale.
    fn get(&self) -> Result<T, MetaError> {
        self.localize(&default_locale())
    }

    /// Returns the value for `locale`, or `fallback` if it cannot be produced.
    fn get_or(&self, locale: &Locale, fallback: T) -> T {
        match self.localize(locale) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(locale = %locale, error = %err, "Using localization fallback");
                fallback
            }
        }
    }

    /// Adapts this value to a [`Supplier`] for a fixed locale, e.g. to feed
    /// [`MetaProperty::value_or_else`](crate::MetaProperty::value_or_else).
    fn supplier(&self, locale: Locale, fallback: T) -> LocalizedSupplier<'_, Self, T>
    where
        Self: Sized,
    {
        LocalizedSupplier {
            localized: self,
            locale,
            fallback,
        }
    }
}

/// Supplier returned by [`Localized::supplier`].
pub struct LocalizedSupplier<'a, L, T> {
    localized: &'a L,
    locale: Locale,
    fallback: T,
}

impl<L, T> Supplier<T> for LocalizedSupplier<'_, L, T>
where
    L: Localized<T>,
    T: Clone,
{
    fn get(&self) -> T {
        self.localized.get_or(&self.locale, self.fallback.clone())
    }
}

/// A localized value backed by a map, with a default for unknown locales.
///
/// Lookups walk [`Locale::candidates`], so `es_MX` falls back to `es` before
/// falling back to the default value.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedMap<T> {
    default: T,
    values: HashMap<Locale, T>,
}

impl<T> LocalizedMap<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            values: HashMap::new(),
        }
    }

    /// Adds or replaces the value for `locale`.
    pub fn with(mut self, locale: Locale, value: T) -> Self {
        self.values.insert(locale, value);
        self
    }

    /// Adds or replaces the value for the locale tag `tag`.
    pub fn with_tag(self, tag: &str, value: T) -> Result<Self, MetaError> {
        Ok(self.with(tag.parse()?, value))
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Best match for `locale` without cloning.
    pub fn lookup(&self, locale: &Locale) -> &T {
        locale
            .candidates()
            .find_map(|candidate| self.values.get(&candidate))
            .unwrap_or(&self.default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Clone> Localized<T> for LocalizedMap<T> {
    fn localize(&self, locale: &Locale) -> Result<T, MetaError> {
        Ok(self.lookup(locale).clone())
    }
}
