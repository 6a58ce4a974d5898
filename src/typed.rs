//! Descriptors bound to a concrete value type.
//!
//! These are aliases: they narrow `V` and keep every constructor of the
//! descriptor they alias, so declaration sites don't repeat the value type.
//!
//! ```ignore
//! use metaprop::DoubleMetaProperty;
//!
//! struct Order;
//!
//! let discount = DoubleMetaProperty::<Order>::probability("discount", false, Some(0.0))?;
//! assert!(discount.is_valid(Some(&0.25)));
//! ```

use std::borrow::Cow;

use crate::comparable::ComparableMetaProperty;
use crate::error::MetaError;
use crate::property::MetaProperty;

/// Double-valued property descriptor.
pub type DoubleMetaProperty<C> = ComparableMetaProperty<C, f64>;

/// Float-valued property descriptor.
pub type FloatMetaProperty<C> = ComparableMetaProperty<C, f32>;

/// Integer-valued property descriptor.
pub type IntegerMetaProperty<C> = ComparableMetaProperty<C, i32>;

/// Long-valued property descriptor.
pub type LongMetaProperty<C> = ComparableMetaProperty<C, i64>;

/// String-valued property descriptor. Strings are ordered lexicographically.
pub type StringMetaProperty<C> = ComparableMetaProperty<C, String>;

/// Boolean-valued property descriptor.
pub type BooleanMetaProperty<C> = MetaProperty<C, bool>;

impl<C> ComparableMetaProperty<C, f64> {
    /// Descriptor rejecting `NaN` and infinite values.
    pub fn finite(name: impl Into<Cow<'static, str>>, required: bool) -> Result<Self, MetaError> {
        Self::validated(name, required, |v: &f64| v.is_finite())
    }

    /// Descriptor accepting values in `[0.0, 1.0]`.
    pub fn probability(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        default_value: Option<f64>,
    ) -> Result<Self, MetaError> {
        Self::ranged(name, required, 0.0..=1.0, default_value)
    }
}

impl<C> ComparableMetaProperty<C, i32> {
    /// Descriptor accepting strictly positive values.
    pub fn positive(name: impl Into<Cow<'static, str>>, required: bool) -> Result<Self, MetaError> {
        Self::ranged(name, required, 1.., None)
    }
}

impl<C> ComparableMetaProperty<C, i64> {
    /// Descriptor accepting strictly positive values.
    pub fn positive(name: impl Into<Cow<'static, str>>, required: bool) -> Result<Self, MetaError> {
        Self::ranged(name, required, 1.., None)
    }
}

impl<C> ComparableMetaProperty<C, String> {
    /// Descriptor rejecting empty and whitespace-only strings.
    pub fn non_blank(name: impl Into<Cow<'static, str>>, required: bool) -> Result<Self, MetaError> {
        Self::validated(name, required, |s: &String| !s.trim().is_empty())
    }
}
