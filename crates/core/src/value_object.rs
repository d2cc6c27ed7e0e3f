//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Two
/// `ItemName`s wrapping the same string are the same name; there is no
/// separate identity to track.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy around
/// - **PartialEq**: comparison is by value
/// - **Debug**: helpful for logging and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
