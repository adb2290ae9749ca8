//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own. Two values with the same
/// attributes are interchangeable, e.g. two items both named `"Herb"`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
