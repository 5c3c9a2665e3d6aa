//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same wrapped value are equal, and "modifying" one means
/// constructing a new one. Construction is the only entry point, so a value
/// object that exists has already passed its validation rule.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
