//! Predicate and supplier capabilities.
//!
//! Descriptors consume a [`Predicate`] to decide whether a value is valid, and
//! fallback-accepting accessors consume a [`Supplier`]. Both traits have
//! blanket implementations for closures, so callers rarely name them:
//!
//! ```ignore
//! use metaprop::predicate::Validity;
//!
//! let non_negative = Validity::new(|v: &f64| *v >= 0.0);
//! let small = non_negative.and(Validity::new(|v: &f64| *v < 10.0));
//! assert!(small.test(&3.0));
//! ```

use std::fmt;
use std::sync::Arc;

/// A unary boolean test over a value.
///
/// Implementations must be deterministic per call and safe for concurrent
/// read, since descriptors holding them are shared across threads.
pub trait Predicate<T: ?Sized>: Send + Sync {
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// A zero-argument value producer.
pub trait Supplier<T> {
    fn get(&self) -> T;
}

impl<T, F> Supplier<T> for F
where
    F: Fn() -> T,
{
    fn get(&self) -> T {
        self()
    }
}

/// Shared validity predicate stored by descriptors.
///
/// Cloning is cheap (reference-counted) so descriptors can be cloned and
/// composed without re-allocating their predicates.
pub struct Validity<V: ?Sized>(Arc<dyn Predicate<V>>);

impl<V: ?Sized + 'static> Validity<V> {
    /// Wrap a predicate.
    pub fn new(predicate: impl Predicate<V> + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// A predicate that accepts every value.
    pub fn always() -> Self {
        Self::new(|_: &V| true)
    }

    /// A predicate that rejects every value.
    pub fn never() -> Self {
        Self::new(|_: &V| false)
    }

    /// Logical AND, short-circuiting on `self`.
    pub fn and(self, other: Validity<V>) -> Self {
        Self::new(move |v: &V| self.test(v) && other.test(v))
    }

    /// Logical OR, short-circuiting on `self`.
    pub fn or(self, other: Validity<V>) -> Self {
        Self::new(move |v: &V| self.test(v) || other.test(v))
    }

    /// Logical negation.
    pub fn negate(self) -> Self {
        Self::new(move |v: &V| !self.test(v))
    }

    /// Combine an optional predicate with another one (logical AND). An absent
    /// predicate accepts everything, so the result is `other` alone.
    pub fn and_optional(base: Option<Validity<V>>, other: Validity<V>) -> Self {
        match base {
            Some(base) => base.and(other),
            None => other,
        }
    }
}

impl<V: ?Sized> Validity<V> {
    /// Evaluate the predicate.
    pub fn test(&self, value: &V) -> bool {
        self.0.test(value)
    }
}

impl<V: ?Sized> Predicate<V> for Validity<V> {
    fn test(&self, value: &V) -> bool {
        self.0.test(value)
    }
}

impl<V: ?Sized> Clone for Validity<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V: ?Sized> fmt::Debug for Validity<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validity(..)")
    }
}
