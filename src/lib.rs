//! metaprop - typed property descriptors
//!
//! Describes the properties of a containing type `C`: their value type, whether
//! they are required, which values are valid and which value to use when none
//! is given. Descriptors are immutable and meant to be declared once, as
//! process-wide metadata, and shared by builders, validators and loaders.
//!
//! - [`MetaProperty`] - base descriptor
//! - [`ComparableMetaProperty`] - descriptor for ordered values, with ranges
//! - [`DoubleMetaProperty`] and friends - descriptors bound to a value type
//! - [`Property`] - validation interface shared by every descriptor
//! - [`PropertyTable`] - descriptors of a type bound to accessors
//! - [`meta_property!`] - static descriptor declarations

#[macro_use]
mod macros;

pub mod builder;
pub mod comparable;
pub mod config;
pub mod error;
pub mod i18n;
pub mod predicate;
pub mod property;
pub mod table;
pub mod typed;

pub use builder::Builder;
pub use comparable::ComparableMetaProperty;
pub use error::MetaError;
pub use predicate::{Predicate, Supplier, Validity};
pub use property::{MetaProperty, Property};
pub use table::{PropertyTable, Violation, ViolationKind};
pub use typed::{
    BooleanMetaProperty, DoubleMetaProperty, FloatMetaProperty, IntegerMetaProperty,
    LongMetaProperty, StringMetaProperty,
};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
