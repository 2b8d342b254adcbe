//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own; two instances holding the same
/// attributes are interchangeable. In this workspace `Product` and `Profile`
/// are value objects, while `User` and `Order` are entities.
///
/// ```ignore
/// let a = Product::new("Keyboard", 49.0);
/// let b = Product::new("Keyboard", 49.0);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
