//! Error types for descriptor construction, localization and configuration.

use thiserror::Error;

/// Errors raised by metaprop.
///
/// Validation failures are never reported through this type: `is_valid`
/// returns `false` and [`PropertyTable::validate`](crate::table::PropertyTable::validate)
/// returns [`Violation`](crate::table::Violation) values.
#[derive(Error, Debug)]
pub enum MetaError {
    // Invalid arguments
    #[error("Property name must not be empty")]
    EmptyName,

    #[error("Default value of property '{0}' does not satisfy its validity predicate")]
    InvalidDefault(String),

    #[error("Range of property '{0}' admits no value")]
    EmptyRange(String),

    #[error("Duplicate property: {0}")]
    DuplicateProperty(String),

    #[error("Invalid locale: '{0}'")]
    InvalidLocale(String),

    // Builder errors
    #[error("Illegal builder state: {0}")]
    IllegalState(String),

    // Localization errors
    #[error("Unable to localize for locale '{0}'")]
    UnableToLocalize(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl MetaError {
    /// Returns true for errors caused by an invalid argument passed by the
    /// caller, as opposed to state or environment failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            MetaError::EmptyName
                | MetaError::InvalidDefault(_)
                | MetaError::EmptyRange(_)
                | MetaError::DuplicateProperty(_)
                | MetaError::InvalidLocale(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        assert!(MetaError::EmptyName.is_invalid_argument());
        assert!(MetaError::InvalidDefault("discount".into()).is_invalid_argument());
        assert!(MetaError::EmptyRange("age".into()).is_invalid_argument());
        assert!(MetaError::DuplicateProperty("name".into()).is_invalid_argument());
        assert!(MetaError::InvalidLocale("1x".into()).is_invalid_argument());
        assert!(!MetaError::IllegalState("no name".into()).is_invalid_argument());
        assert!(!MetaError::UnableToLocalize("es_ES".into()).is_invalid_argument());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MetaError::InvalidDefault("discount".into()).to_string(),
            "Default value of property 'discount' does not satisfy its validity predicate"
        );
        assert_eq!(
            MetaError::EmptyName.to_string(),
            "Property name must not be empty"
        );
    }
}
