//! Macro for declaring descriptors as process-wide statics.

/// Declares lazily initialized static descriptors.
///
/// Each initializer is an expression returning `Result<Descriptor, MetaError>`,
/// usually one of the descriptor constructors. The descriptor is built on
/// first access; a constructor error is a programming error and panics there.
///
/// # Usage
///
/// ```ignore
/// use metaprop::{meta_property, DoubleMetaProperty, StringMetaProperty};
///
/// pub struct Parcel;
///
/// meta_property! {
///     /// Weight in kilograms.
///     pub static WEIGHT: DoubleMetaProperty<Parcel> =
///         DoubleMetaProperty::at_least("weight", true, 0.0);
///     pub static LABEL: StringMetaProperty<Parcel> =
///         StringMetaProperty::non_blank("label", false);
/// }
///
/// assert!(WEIGHT.is_valid(Some(&1.5)));
/// ```
#[macro_export]
macro_rules! meta_property {
    ($($(#[$attr:meta])* $vis:vis static $name:ident : $ty:ty = $init:expr;)+) => {
        $(
            $(#[$attr])*
            $vis static $name: $crate::__private::Lazy<$ty> = $crate::__private::Lazy::new(|| {
                match $init {
                    Ok(property) => property,
                    Err(err) => panic!(
                        "invalid property descriptor `{}`: {}",
                        stringify!($name),
                        err
                    ),
                }
            });
        )+
    };
}
