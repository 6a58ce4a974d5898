//! Property tables: the descriptors of a containing type, bound to accessors.
//!
//! A [`PropertyTable<C>`] is built once, ahead of time, and lists every
//! descriptor of `C` together with a function reading the property from an
//! instance. It validates whole instances and can be queried by field
//! metadata without reflection.
//!
//! # Example
//!
//! ```ignore
//! use metaprop::table::{self, PropertyTable};
//!
//! let table = PropertyTable::<Parcel>::new()
//!     .bind(&*WEIGHT, |p: &Parcel| p.weight.as_ref())?
//!     .bind(&*LABEL, |p: &Parcel| p.label.as_ref())?;
//!
//! for violation in table.validate(&parcel) {
//!     eprintln!("{violation}");
//! }
//!
//! let required: Vec<_> = table.filter(table::required()).map(|f| f.name()).collect();
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::MetaError;
use crate::predicate::{Predicate, Validity};
use crate::property::Property;

/// Metadata of a bound field, independent of its value type.
pub trait FieldInfo {
    fn name(&self) -> &str;

    fn is_required(&self) -> bool;

    fn has_default(&self) -> bool;

    /// Name of the value type, as reported by `std::any::type_name`.
    fn value_type(&self) -> &'static str;
}

/// Type-erased binding of a descriptor to an accessor of `C`.
trait FieldCheck<C>: FieldInfo + Send + Sync {
    fn check(&self, instance: &C) -> Option<Violation>;

    fn info(&self) -> &(dyn FieldInfo + 'static);
}

struct Binding<P, F> {
    property: P,
    accessor: F,
}

impl<P, F> FieldInfo for Binding<P, F>
where
    P: Property,
{
    fn name(&self) -> &str {
        self.property.name()
    }

    fn is_required(&self) -> bool {
        self.property.is_required()
    }

    fn has_default(&self) -> bool {
        self.property.default_value().is_some()
    }

    fn value_type(&self) -> &'static str {
        std::any::type_name::<P::Value>()
    }
}

impl<C, P, F> FieldCheck<C> for Binding<P, F>
where
    P: Property<Containing = C> + Send + Sync + 'static,
    F: Fn(&C) -> Option<&P::Value> + Send + Sync + 'static,
{
    fn check(&self, instance: &C) -> Option<Violation> {
        let value = (self.accessor)(instance);
        if self.property.is_valid(value) {
            return None;
        }
        let kind = match value {
            None => ViolationKind::Missing,
            Some(_) => ViolationKind::Rejected,
        };
        Some(Violation {
            property: self.property.name().to_string(),
            kind,
        })
    }

    fn info(&self) -> &(dyn FieldInfo + 'static) {
        self
    }
}

/// Why a property value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required property has no value.
    Missing,
    /// The value is rejected by the validity predicate.
    Rejected,
}

/// A property of an instance that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Property name.
    pub property: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Missing => write!(f, "{}: required value is missing", self.property),
            ViolationKind::Rejected => write!(f, "{}: value is not valid", self.property),
        }
    }
}

/// The descriptors of a containing type `C`, in declaration order.
pub struct PropertyTable<C> {
    fields: Vec<Box<dyn FieldCheck<C>>>,
}

impl<C: 'static> PropertyTable<C> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a descriptor read from instances through `accessor`.
    ///
    /// Returns [`MetaError::DuplicateProperty`] if a property with the same
    /// name is already bound.
    pub fn bind<P, F>(mut self, property: P, accessor: F) -> Result<Self, MetaError>
    where
        P: Property<Containing = C> + Send + Sync + 'static,
        F: Fn(&C) -> Option<&P::Value> + Send + Sync + 'static,
    {
        if self.get(property.name()).is_some() {
            return Err(MetaError::DuplicateProperty(property.name().to_string()));
        }
        tracing::debug!(
            property = %property.name(),
            value_type = std::any::type_name::<P::Value>(),
            "Bound property"
        );
        self.fields.push(Box::new(Binding { property, accessor }));
        Ok(self)
    }
}

impl<C> PropertyTable<C> {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field metadata in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn FieldInfo + 'static)> + '_ {
        self.fields.iter().map(|f| f.info())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|f| f.name())
    }

    pub fn get(&self, name: &str) -> Option<&dyn FieldInfo> {
        self.iter().find(|f| f.name() == name)
    }

    /// Field metadata accepted by `predicate`, in declaration order.
    pub fn filter<'a, P>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = &'a (dyn FieldInfo + 'static)> + 'a
    where
        P: Predicate<dyn FieldInfo> + 'a,
    {
        self.iter().filter(move |f| predicate.test(*f))
    }

    /// Validate every bound property of `instance`.
    pub fn validate(&self, instance: &C) -> Vec<Violation> {
        let violations: Vec<Violation> = self
            .fields
            .iter()
            .filter_map(|f| f.check(instance))
            .collect();
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "Instance failed validation");
        }
        violations
    }

    pub fn is_valid(&self, instance: &C) -> bool {
        self.fields.iter().all(|f| f.check(instance).is_none())
    }
}

impl<C: 'static> Default for PropertyTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields whose property is required.
pub fn required() -> Validity<dyn FieldInfo> {
    Validity::new(|f: &(dyn FieldInfo + 'static)| f.is_required())
}

/// Fields whose property has a default value.
pub fn with_default() -> Validity<dyn FieldInfo> {
    Validity::new(|f: &(dyn FieldInfo + 'static)| f.has_default())
}

/// The field named `name`.
pub fn named(name: impl Into<String>) -> Validity<dyn FieldInfo> {
    let name = name.into();
    Validity::new(move |f: &(dyn FieldInfo + 'static)| f.name() == name)
}
