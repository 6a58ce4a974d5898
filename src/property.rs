//! Base property descriptor.
//!
//! A [`MetaProperty<C, V>`] describes one named attribute of a containing type
//! `C` whose values have type `V`: whether a value is required, which values
//! are valid and which value to use when none is given.
//!
//! # Example
//!
//! ```ignore
//! use metaprop::{MetaProperty, Validity};
//!
//! struct Parcel;
//!
//! let label: MetaProperty<Parcel, String> = MetaProperty::with_default(
//!     "label",
//!     false,
//!     Some(Validity::new(|s: &String| s.len() <= 32)),
//!     Some("unlabelled".to_string()),
//! )?;
//!
//! assert!(label.is_valid(None));
//! assert_eq!(label.default_value().map(String::as_str), Some("unlabelled"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::error::MetaError;
use crate::predicate::{Predicate, Supplier, Validity};

/// Validation interface shared by every descriptor.
///
/// Builders, validators and loaders are written against this trait so they
/// don't depend on the concrete descriptor type.
pub trait Property {
    /// The type the property belongs to. Only used as a marker.
    type Containing;
    /// The type of the property values.
    type Value;

    fn name(&self) -> &str;

    fn is_required(&self) -> bool;

    fn default_value(&self) -> Option<&Self::Value>;

    /// Checks a possibly absent value.
    ///
    /// Absent values are valid only for non-required properties. Present
    /// values are checked against the validity predicate, if any.
    fn is_valid(&self, value: Option<&Self::Value>) -> bool;
}

impl<P: Property + ?Sized> Property for &P {
    type Containing = P::Containing;
    type Value = P::Value;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_required(&self) -> bool {
        (**self).is_required()
    }

    fn default_value(&self) -> Option<&Self::Value> {
        (**self).default_value()
    }

    fn is_valid(&self, value: Option<&Self::Value>) -> bool {
        (**self).is_valid(value)
    }
}

/// Descriptor of a property of type `V` in a containing type `C`.
///
/// Immutable once built. `C` is a type-level marker: it is never stored and
/// does not constrain `Send`, `Sync` or `Clone`.
pub struct MetaProperty<C, V> {
    name: Cow<'static, str>,
    required: bool,
    validity: Option<Validity<V>>,
    default_value: Option<V>,
    _containing: PhantomData<fn() -> C>,
}

impl<C, V: 'static> MetaProperty<C, V> {
    /// Descriptor without validity predicate nor default value.
    pub fn new(name: impl Into<Cow<'static, str>>, required: bool) -> Result<Self, MetaError> {
        Self::with_default(name, required, None, None)
    }

    /// Descriptor with a validity predicate and no default value.
    pub fn validated(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        validity: impl Predicate<V> + 'static,
    ) -> Result<Self, MetaError> {
        Self::with_default(name, required, Some(Validity::new(validity)), None)
    }

    /// Descriptor with every part specified.
    ///
    /// # Errors
    ///
    /// - [`MetaError::EmptyName`] if `name` is empty
    /// - [`MetaError::InvalidDefault`] if `default_value` is rejected by `validity`
    pub fn with_default(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        validity: Option<Validity<V>>,
        default_value: Option<V>,
    ) -> Result<Self, MetaError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MetaError::EmptyName);
        }

        if let (Some(validity), Some(default)) = (&validity, &default_value) {
            if !validity.test(default) {
                return Err(MetaError::InvalidDefault(name.into_owned()));
            }
        }

        tracing::debug!(
            property = %name,
            required,
            has_validity = validity.is_some(),
            has_default = default_value.is_some(),
            "Constructed meta property"
        );

        Ok(Self {
            name,
            required,
            validity,
            default_value,
            _containing: PhantomData,
        })
    }

    /// Start a fluent builder for a descriptor named `name`.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> crate::builder::MetaPropertyBuilder<C, V> {
        crate::builder::MetaPropertyBuilder::new(name)
    }
}

impl<C, V> MetaProperty<C, V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&V> {
        self.default_value.as_ref()
    }

    /// Returns true if a validity predicate is configured.
    pub fn has_validity(&self) -> bool {
        self.validity.is_some()
    }

    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// The configured validity predicate, if any.
    pub fn validity(&self) -> Option<&Validity<V>> {
        self.validity.as_ref()
    }

    /// Checks a possibly absent value. See [`Property::is_valid`].
    pub fn is_valid(&self, value: Option<&V>) -> bool {
        match value {
            None => !self.required,
            Some(value) => {
                let valid = self.validity.as_ref().map_or(true, |p| p.test(value));
                if !valid {
                    tracing::trace!(property = %self.name, "Value rejected by validity predicate");
                }
                valid
            }
        }
    }
}

impl<C, V: Clone> MetaProperty<C, V> {
    /// The explicit value if present, otherwise the default value.
    pub fn resolve(&self, value: Option<V>) -> Option<V> {
        value.or_else(|| self.default_value.clone())
    }

    /// The explicit value if present, otherwise the default value, otherwise
    /// whatever `fallback` supplies.
    pub fn value_or_else<S: Supplier<V>>(&self, value: Option<V>, fallback: S) -> V {
        match self.resolve(value) {
            Some(value) => value,
            None => fallback.get(),
        }
    }
}

impl<C, V> Property for MetaProperty<C, V> {
    type Containing = C;
    type Value = V;

    fn name(&self) -> &str {
        MetaProperty::name(self)
    }

    fn is_required(&self) -> bool {
        MetaProperty::is_required(self)
    }

    fn default_value(&self) -> Option<&V> {
        MetaProperty::default_value(self)
    }

    fn is_valid(&self, value: Option<&V>) -> bool {
        MetaProperty::is_valid(self, value)
    }
}

impl<C, V: Clone> Clone for MetaProperty<C, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            required: self.required,
            validity: self.validity.clone(),
            default_value: self.default_value.clone(),
            _containing: PhantomData,
        }
    }
}

impl<C, V: fmt::Debug> fmt::Debug for MetaProperty<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaProperty")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("validity", &self.validity)
            .field("default_value", &self.default_value)
            .finish()
    }
}
