//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity** and are **immutable**: two values with the
/// same attributes are the same value. To "modify" one, build a new one.
///
/// `Route` is the main example in navkit: the route of a request is only ever
/// compared, never updated.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
