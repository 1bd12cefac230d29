//! Listable trait: what an element must provide to live in a [`SortedList`].
//!
//! [`SortedList`]: crate::SortedList

use std::sync::Arc;

/// An immutable, named, priced element.
///
/// Listable values are **immutable**: a list never changes an element's
/// attributes, it only moves whole elements in and out. That is what lets
/// the same value sit in several lists at once (see the `Arc<T>` impl).
///
/// ## Key vs. equality
///
/// Two separate predicates are involved:
///
/// - **Order key** ([`order_key`](Listable::order_key)) decides *where* an
///   element sits. Elements with equal keys form a contiguous run.
/// - **Equality** ([`matches`](Listable::matches)) decides whether an element
///   *is* the one being removed or looked up.
///
/// Two ingredients both named `"Bun"` but priced differently share a key and
/// are therefore neighbours, yet they do not match each other.
///
/// Implementors must keep the two consistent: `matches` is an equivalence
/// relation, and `a.matches(b)` implies `a.order_key() == b.order_key()`.
/// Lookups only scan the key run of the probe, so a `matches` that crosses
/// key runs would never be observed.
///
/// ## Rendering
///
/// `Display` is the element's human-readable form, used when a list renders
/// itself (`[ a, b, c ]`).
pub trait Listable: Clone + core::fmt::Debug + core::fmt::Display {
    /// Display name of the element.
    fn name(&self) -> &str;

    /// Cost to acquire the element, in the smallest currency unit.
    fn wholesale_cost(&self) -> u64;

    /// Revenue earned when the element is sold, in the smallest currency unit.
    fn retail_value(&self) -> u64;

    /// Key the element is sorted by. Defaults to the name.
    fn order_key(&self) -> &str {
        self.name()
    }

    /// Whether `self` and `other` are the same element for removal and lookup.
    fn matches(&self, other: &Self) -> bool;
}

impl<T: Listable> Listable for Arc<T> {
    fn name(&self) -> &str {
        T::name(self)
    }

    fn wholesale_cost(&self) -> u64 {
        T::wholesale_cost(self)
    }

    fn retail_value(&self) -> u64 {
        T::retail_value(self)
    }

    fn order_key(&self) -> &str {
        T::order_key(self)
    }

    fn matches(&self, other: &Self) -> bool {
        T::matches(self, other)
    }
}
