//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; two value objects holding the same
//! values are interchangeable.

/// Marker trait for value objects.
///
/// Update policies are the canonical example here: a policy is fully
/// described by which rule it applies, so any two `AgedBrie` policies are the
/// same policy.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: helpful for logging and tests
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Policy { Standard, Legendary }
///
/// impl ValueObject for Policy {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
