//! Fluent builders.
//!
//! [`Builder`] is the scaffold: implementors provide [`do_build`](Builder::do_build)
//! and optionally [`check_state`](Builder::check_state), and callers use
//! [`build`](Builder::build), which runs the check first. Chained setters take
//! and return `Self`, so a builder always returns its own concrete type.
//!
//! # Example
//!
//! ```ignore
//! use metaprop::builder::Builder;
//! use metaprop::MetaProperty;
//!
//! struct Order;
//!
//! let discount = MetaProperty::<Order, f64>::builder("discount")
//!     .optional()
//!     .default_value(0.0)
//!     .range(0.0..=1.0)
//!     .build()?;
//! ```

use std::borrow::Cow;
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};

use crate::comparable::ComparableMetaProperty;
use crate::error::MetaError;
use crate::predicate::{Predicate, Validity};
use crate::property::MetaProperty;

/// Base trait for builders.
pub trait Builder {
    /// The type of the built value.
    type Output;

    /// Checks the state of the builder before building.
    ///
    /// Override to implement custom checks. Returns
    /// [`MetaError::IllegalState`] (or a more specific error) when the target
    /// cannot be built from the current state.
    fn check_state(&self) -> Result<(), MetaError> {
        Ok(())
    }

    /// Builds the target value. Called by [`build`](Builder::build) after a
    /// successful [`check_state`](Builder::check_state).
    fn do_build(&self) -> Result<Self::Output, MetaError>;

    /// Checks the state and builds the target value.
    fn build(&self) -> Result<Self::Output, MetaError> {
        self.check_state()?;
        self.do_build()
    }
}

/// Builder for [`MetaProperty`].
///
/// Properties are optional unless [`required`](Self::required) is called.
pub struct MetaPropertyBuilder<C, V> {
    name: Cow<'static, str>,
    required: bool,
    validity: Option<Validity<V>>,
    default_value: Option<V>,
    _containing: PhantomData<fn() -> C>,
}

impl<C, V: 'static> MetaPropertyBuilder<C, V> {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            required: false,
            validity: None,
            default_value: None,
            _containing: PhantomData,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the validity predicate, replacing any previous one.
    pub fn validity(mut self, validity: impl Predicate<V> + 'static) -> Self {
        self.validity = Some(Validity::new(validity));
        self
    }

    pub fn default_value(mut self, value: V) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Constrain the values to `range`, switching to a builder of
    /// [`ComparableMetaProperty`].
    pub fn range<R>(self, range: R) -> ComparableMetaPropertyBuilder<C, V>
    where
        R: RangeBounds<V>,
        V: PartialOrd + Clone,
    {
        ComparableMetaPropertyBuilder {
            lower: range.start_bound().cloned(),
            upper: range.end_bound().cloned(),
            base: self,
        }
    }
}

impl<C, V: Clone + 'static> Builder for MetaPropertyBuilder<C, V> {
    type Output = MetaProperty<C, V>;

    fn check_state(&self) -> Result<(), MetaError> {
        if self.name.is_empty() {
            return Err(MetaError::EmptyName);
        }
        Ok(())
    }

    fn do_build(&self) -> Result<Self::Output, MetaError> {
        MetaProperty::with_default(
            self.name.clone(),
            self.required,
            self.validity.clone(),
            self.default_value.clone(),
        )
    }
}

/// Builder for [`ComparableMetaProperty`], obtained from
/// [`MetaPropertyBuilder::range`].
pub struct ComparableMetaPropertyBuilder<C, V> {
    base: MetaPropertyBuilder<C, V>,
    lower: Bound<V>,
    upper: Bound<V>,
}

impl<C, V: 'static> ComparableMetaPropertyBuilder<C, V> {
    pub fn required(mut self) -> Self {
        self.base = self.base.required();
        self
    }

    pub fn optional(mut self) -> Self {
        self.base = self.base.optional();
        self
    }

    /// Sets an additional validity predicate, checked together with the range.
    pub fn validity(mut self, validity: impl Predicate<V> + 'static) -> Self {
        self.base = self.base.validity(validity);
        self
    }

    pub fn default_value(mut self, value: V) -> Self {
        self.base = self.base.default_value(value);
        self
    }
}

impl<C, V> Builder for ComparableMetaPropertyBuilder<C, V>
where
    V: PartialOrd + Clone + Send + Sync + 'static,
{
    type Output = ComparableMetaProperty<C, V>;

    fn check_state(&self) -> Result<(), MetaError> {
        self.base.check_state()
    }

    fn do_build(&self) -> Result<Self::Output, MetaError> {
        ComparableMetaProperty::bounded(
            self.base.name.clone(),
            self.base.required,
            self.base.validity.clone(),
            self.lower.clone(),
            self.upper.clone(),
            self.base.default_value.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::Property;

    struct Order;

    #[test]
    fn test_builder_defaults_to_optional() {
        let p = MetaPropertyBuilder::<Order, i32>::new("count").build().unwrap();
        assert!(!p.is_required());
        assert!(!p.has_validity());
        assert!(!p.has_default());
    }

    #[test]
    fn test_builder_matches_constructor() {
        let built = MetaProperty::<Order, i32>::builder("count")
            .required()
            .validity(|v: &i32| *v > 0)
            .default_value(1)
            .build()
            .unwrap();
        let constructed = MetaProperty::<Order, i32>::with_default(
            "count",
            true,
            Some(Validity::new(|v: &i32| *v > 0)),
            Some(1),
        )
        .unwrap();

        for v in [-1, 0, 1, 2] {
            assert_eq!(built.is_valid(Some(&v)), constructed.is_valid(Some(&v)));
        }
        assert_eq!(built.is_valid(None), constructed.is_valid(None));
        assert_eq!(built.default_value(), constructed.default_value());
    }

    #[test]
    fn test_last_validity_wins() {
        let p = MetaProperty::<Order, i32>::builder("count")
            .validity(|v: &i32| *v > 100)
            .validity(|v: &i32| *v < 0)
            .build()
            .unwrap();
        assert!(p.is_valid(Some(&-1)));
        assert!(!p.is_valid(Some(&101)));
    }

    #[test]
    fn test_empty_name_fails_check_state() {
        let builder = MetaProperty::<Order, i32>::builder("");
        assert!(matches!(builder.check_state(), Err(MetaError::EmptyName)));
        assert!(matches!(builder.build(), Err(MetaError::EmptyName)));
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = MetaProperty::<Order, i32>::builder("count").default_value(2);
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first.default_value(), second.default_value());
    }

    #[test]
    fn test_range_builder() {
        let discount = MetaProperty::<Order, f64>::builder("discount")
            .optional()
            .default_value(0.0)
            .range(0.0..=1.0)
            .build()
            .unwrap();
        assert!(discount.is_valid(None));
        assert!(discount.is_valid(Some(&1.0)));
        assert!(!discount.is_valid(Some(&1.5)));
        assert_eq!(Property::default_value(&discount), Some(&0.0));
    }

    #[test]
    fn test_range_builder_composes_validity() {
        let p = MetaProperty::<Order, i32>::builder("slots")
            .range(0..=10)
            .validity(|v: &i32| v % 2 == 0)
            .required()
            .build()
            .unwrap();
        assert!(p.is_required());
        assert!(p.is_valid(Some(&4)));
        assert!(!p.is_valid(Some(&3)));
        assert!(!p.is_valid(Some(&12)));
    }

    #[test]
    fn test_range_builder_rejects_default_outside_range() {
        let result = MetaProperty::<Order, i32>::builder("slots")
            .range(0..=10)
            .default_value(11)
            .build();
        assert!(matches!(result, Err(MetaError::InvalidDefault(_))));
    }

    struct Pair {
        left: Option<i32>,
        right: Option<i32>,
    }

    impl Builder for Pair {
        type Output = (i32, i32);

        fn check_state(&self) -> Result<(), MetaError> {
            if self.left.is_none() || self.right.is_none() {
                return Err(MetaError::IllegalState("both sides must be set".into()));
            }
            Ok(())
        }

        fn do_build(&self) -> Result<Self::Output, MetaError> {
            Ok((self.left.unwrap_or_default(), self.right.unwrap_or_default()))
        }
    }

    #[test]
    fn test_check_state_runs_before_do_build() {
        let incomplete = Pair {
            left: Some(1),
            right: None,
        };
        assert!(matches!(incomplete.build(), Err(MetaError::IllegalState(_))));

        let complete = Pair {
            left: Some(1),
            right: Some(2),
        };
        assert_eq!(complete.build().unwrap(), (1, 2));
    }
}
