//! Locale identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MetaError;

/// A locale: language, optional country and optional variant.
///
/// Parsed from tags such as `es`, `es_ES`, `es-ES` or `ca_ES_valencia`.
/// Language is normalized to lowercase and country to uppercase; the variant
/// is kept as given. The empty tag is the root locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// Locale for a language only. The language is lowercased.
    ///
    /// # Errors
    ///
    /// [`MetaError::InvalidLocale`] if `language` is not 2 to 8 ASCII letters.
    pub fn new(language: &str) -> Result<Self, MetaError> {
        if !is_alpha(language, 2, 8) {
            return Err(MetaError::InvalidLocale(language.to_string()));
        }
        Ok(Self {
            language: language.to_ascii_lowercase(),
            country: None,
            variant: None,
        })
    }

    /// Locale for a language and country, validated like a parsed tag.
    pub fn with_country(language: &str, country: &str) -> Result<Self, MetaError> {
        if !is_country(country) {
            return Err(MetaError::InvalidLocale(format!("{language}_{country}")));
        }
        let mut locale = Self::new(language)
            .map_err(|_| MetaError::InvalidLocale(format!("{language}_{country}")))?;
        locale.country = Some(country.to_ascii_uppercase());
        Ok(locale)
    }

    /// The root locale, the last step of every lookup chain.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.country.is_none() && self.variant.is_none()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// The next, less specific locale in the lookup chain, or `None` for root.
    pub fn parent(&self) -> Option<Locale> {
        if self.variant.is_some() {
            Some(Locale {
                variant: None,
                ..self.clone()
            })
        } else if self.country.is_some() {
            Some(Locale {
                language: self.language.clone(),
                country: None,
                variant: None,
            })
        } else if !self.language.is_empty() {
            Some(Locale::root())
        } else {
            None
        }
    }

    /// Lookup chain from this locale to root, most specific first.
    pub fn candidates(&self) -> impl Iterator<Item = Locale> {
        std::iter::successors(Some(self.clone()), Locale::parent)
    }
}

fn is_alpha(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

// ISO 3166 letters or a UN M.49 area code, e.g. "419" for Latin America.
fn is_country(s: &str) -> bool {
    is_alpha(s, 2, 3) || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
}

fn is_variant(s: &str) -> bool {
    !s.is_empty()
        && !s.ends_with(['_', '-'])
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl FromStr for Locale {
    type Err = MetaError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Locale::root());
        }

        let invalid = || MetaError::InvalidLocale(tag.to_string());
        let mut parts = tag.splitn(3, ['_', '-']);

        let language = parts.next().unwrap_or_default();
        if !is_alpha(language, 2, 8) {
            return Err(invalid());
        }
        let country = match parts.next() {
            Some(c) if is_country(c) => Some(c.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
            None => None,
        };
        let variant = match parts.next() {
            Some(v) if is_variant(v) => Some(v.to_string()),
            Some(_) => return Err(invalid()),
            None => None,
        };

        Ok(Locale {
            language: language.to_ascii_lowercase(),
            country,
            variant,
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{}", country)?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "_{}", variant)?;
        }
        Ok(())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale: Locale = "ES".parse().unwrap();
        assert_eq!(locale.language(), "es");
        assert_eq!(locale.country(), None);
        assert_eq!(locale, Locale::new("es").unwrap());
    }

    #[test]
    fn test_parse_separators() {
        let underscore: Locale = "es_es".parse().unwrap();
        let dash: Locale = "es-ES".parse().unwrap();
        assert_eq!(underscore, dash);
        assert_eq!(underscore, Locale::with_country("es", "ES").unwrap());
        assert_eq!(underscore.to_string(), "es_ES");
    }

    #[test]
    fn test_parse_variant() {
        let locale: Locale = "ca_ES_valencia".parse().unwrap();
        assert_eq!(locale.country(), Some("ES"));
        assert_eq!(locale.variant(), Some("valencia"));
        assert_eq!(locale.to_string(), "ca_ES_valencia");
    }

    #[test]
    fn test_parse_numeric_region() {
        let locale: Locale = "es_419".parse().unwrap();
        assert_eq!(locale.country(), Some("419"));
    }

    #[test]
    fn test_parse_root() {
        let root: Locale = "".parse().unwrap();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn test_parse_invalid() {
        for tag in ["1234", "e", "es_E", "es_ES_", "toolonglanguage"] {
            let err = tag.parse::<Locale>().unwrap_err();
            assert!(
                matches!(err, MetaError::InvalidLocale(_)),
                "expected invalid locale for {tag:?}"
            );
        }
    }

    #[test]
    fn test_candidates_most_specific_first() {
        let locale: Locale = "ca_ES_valencia".parse().unwrap();
        let chain: Vec<String> = locale.candidates().map(|l| l.to_string()).collect();
        assert_eq!(chain, vec!["ca_ES_valencia", "ca_ES", "ca", ""]);

        assert_eq!(Locale::root().candidates().count(), 1);
    }

    #[test]
    fn test_serde_as_string() {
        let locale = Locale::with_country("pt", "BR").unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"pt_BR\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
        assert!(serde_json::from_str::<Locale>("\"12\"").is_err());
    }

    #[test]
    fn test_constructors_validate_like_parsing() {
        assert!(matches!(Locale::new("es_ES"), Err(MetaError::InvalidLocale(_))));
        assert!(matches!(Locale::new("1x"), Err(MetaError::InvalidLocale(_))));
        assert!(matches!(Locale::new(""), Err(MetaError::InvalidLocale(_))));
        assert!(matches!(
            Locale::with_country("", "ES"),
            Err(MetaError::InvalidLocale(ref tag)) if tag == "_ES"
        ));
        assert!(Locale::with_country("es", "E").is_err());
        assert!(Locale::with_country("es", "ES_x").is_err());
    }

    #[test]
    fn test_constructed_locales_round_trip() {
        let built = [
            Locale::new("ES").unwrap(),
            Locale::with_country("es", "mx").unwrap(),
            Locale::with_country("es", "419").unwrap(),
            Locale::root(),
        ];
        for locale in built {
            let tag = locale.to_string();
            assert_eq!(tag.parse::<Locale>().unwrap(), locale, "display of {tag:?}");

            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(serde_json::from_str::<Locale>(&json).unwrap(), locale);
        }
        assert_eq!(
            Locale::with_country("es", "mx").unwrap(),
            "es-MX".parse::<Locale>().unwrap()
        );
    }
}
