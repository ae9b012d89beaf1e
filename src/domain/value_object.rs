//! Value object traits: equality by value, not identity.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for value objects.
///
/// Value objects are immutable after construction and compare by their
/// contained values. Implementors get equality and hashing from
/// `#[derive(PartialEq, Eq, Hash)]`; this trait only makes the contract
/// visible in bounds.
pub trait ValueObject: Clone + Eq + Hash + Debug {}

/// A value object that wraps exactly one underlying value.
pub trait SingleValue: ValueObject {
    /// The wrapped value type.
    type Value: ?Sized;

    /// Borrow the wrapped value.
    fn value(&self) -> &Self::Value;
}
