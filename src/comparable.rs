//! Descriptors for ordered value types.
//!
//! [`ComparableMetaProperty`] adds range-based construction on top of
//! [`MetaProperty`]. The range is folded into the stored validity predicate,
//! so validation behaves exactly as for the base descriptor.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, Deref, RangeBounds};

use crate::error::MetaError;
use crate::predicate::{Predicate, Validity};
use crate::property::{MetaProperty, Property};

impl<V: PartialOrd + Send + Sync + 'static> Validity<V> {
    /// A predicate accepting the values between `lower` and `upper`.
    ///
    /// Values unordered with respect to a bound (e.g. `NaN`) are rejected.
    pub fn within(lower: Bound<V>, upper: Bound<V>) -> Self {
        Validity::new(move |v: &V| {
            let above = match &lower {
                Bound::Included(l) => v >= l,
                Bound::Excluded(l) => v > l,
                Bound::Unbounded => true,
            };
            above
                && match &upper {
                    Bound::Included(u) => v <= u,
                    Bound::Excluded(u) => v < u,
                    Bound::Unbounded => true,
                }
        })
    }
}

/// Returns true when no value can lie between `lower` and `upper`.
fn is_empty_range<V: PartialOrd>(lower: &Bound<V>, upper: &Bound<V>) -> bool {
    match (lower, upper) {
        (Bound::Included(l), Bound::Included(u)) => {
            !matches!(l.partial_cmp(u), Some(Ordering::Less | Ordering::Equal))
        }
        (Bound::Included(l), Bound::Excluded(u))
        | (Bound::Excluded(l), Bound::Included(u))
        | (Bound::Excluded(l), Bound::Excluded(u)) => {
            !matches!(l.partial_cmp(u), Some(Ordering::Less))
        }
        (Bound::Included(b), Bound::Unbounded)
        | (Bound::Excluded(b), Bound::Unbounded)
        | (Bound::Unbounded, Bound::Included(b))
        | (Bound::Unbounded, Bound::Excluded(b)) => b.partial_cmp(b).is_none(),
        (Bound::Unbounded, Bound::Unbounded) => false,
    }
}

/// Descriptor of a property whose values are ordered.
///
/// Dereferences to the underlying [`MetaProperty`] for its accessors.
pub struct ComparableMetaProperty<C, V> {
    inner: MetaProperty<C, V>,
}

impl<C, V> ComparableMetaProperty<C, V>
where
    V: PartialOrd + Send + Sync + 'static,
{
    /// Descriptor without validity predicate nor default value.
    pub fn new(name: impl Into<Cow<'static, str>>, required: bool) -> Result<Self, MetaError> {
        MetaProperty::new(name, required).map(Self::from_base)
    }

    /// Descriptor with a validity predicate and no default value.
    pub fn validated(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        validity: impl Predicate<V> + 'static,
    ) -> Result<Self, MetaError> {
        MetaProperty::validated(name, required, validity).map(Self::from_base)
    }

    /// Descriptor with every part specified.
    pub fn with_default(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        validity: Option<Validity<V>>,
        default_value: Option<V>,
    ) -> Result<Self, MetaError> {
        MetaProperty::with_default(name, required, validity, default_value).map(Self::from_base)
    }

    /// Descriptor whose values must lie between `lower` and `upper` and, if
    /// given, also satisfy `validity`.
    ///
    /// # Errors
    ///
    /// - [`MetaError::EmptyName`] if `name` is empty
    /// - [`MetaError::EmptyRange`] if no value lies between the bounds
    /// - [`MetaError::InvalidDefault`] if the default is outside the range or
    ///   rejected by `validity`
    ///
    /// Emptiness is judged by comparing the bounds only. A range that is empty
    /// only because `V` is discrete, such as `Excluded(3)..Excluded(4)` on
    /// integers, is accepted and then rejects every present value. A default
    /// value still has to lie inside it, so such a descriptor never has one.
    pub fn bounded(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        validity: Option<Validity<V>>,
        lower: Bound<V>,
        upper: Bound<V>,
        default_value: Option<V>,
    ) -> Result<Self, MetaError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MetaError::EmptyName);
        }
        if is_empty_range(&lower, &upper) {
            return Err(MetaError::EmptyRange(name.into_owned()));
        }

        let validity = Validity::and_optional(validity, Validity::within(lower, upper));
        Self::with_default(name, required, Some(validity), default_value)
    }

    /// Like [`bounded`](Self::bounded), taking the bounds from a range
    /// expression such as `0.0..=1.0` or `18..`.
    pub fn ranged<R>(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        range: R,
        default_value: Option<V>,
    ) -> Result<Self, MetaError>
    where
        R: RangeBounds<V>,
        V: Clone,
    {
        Self::bounded(
            name,
            required,
            None,
            range.start_bound().cloned(),
            range.end_bound().cloned(),
            default_value,
        )
    }

    /// Descriptor accepting values greater than or equal to `lower`.
    pub fn at_least(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        lower: V,
    ) -> Result<Self, MetaError> {
        Self::bounded(name, required, None, Bound::Included(lower), Bound::Unbounded, None)
    }

    /// Descriptor accepting values less than or equal to `upper`.
    pub fn at_most(
        name: impl Into<Cow<'static, str>>,
        required: bool,
        upper: V,
    ) -> Result<Self, MetaError> {
        Self::bounded(name, required, None, Bound::Unbounded, Bound::Included(upper), None)
    }
}

impl<C, V> ComparableMetaProperty<C, V> {
    fn from_base(inner: MetaProperty<C, V>) -> Self {
        Self { inner }
    }

    /// The underlying base descriptor.
    pub fn as_meta_property(&self) -> &MetaProperty<C, V> {
        &self.inner
    }

    pub fn into_meta_property(self) -> MetaProperty<C, V> {
        self.inner
    }
}

impl<C, V> Deref for ComparableMetaProperty<C, V> {
    type Target = MetaProperty<C, V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<C, V> Property for ComparableMetaProperty<C, V> {
    type Containing = C;
    type Value = V;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_required(&self) -> bool {
        self.inner.is_required()
    }

    fn default_value(&self) -> Option<&V> {
        self.inner.default_value()
    }

    fn is_valid(&self, value: Option<&V>) -> bool {
        self.inner.is_valid(value)
    }
}

impl<C, V: Clone> Clone for ComparableMetaProperty<C, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C, V: fmt::Debug> fmt::Debug for ComparableMetaProperty<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComparableMetaProperty")
            .field(&self.inner)
            .finish()
    }
}
