//! Sorted multiset container.
//!
//! Every list in the workspace (ingredient bundles, inventories, menus) is a
//! [`SortedList`]. Elements are kept non-descending by
//! [`Listable::order_key`]; duplicates are allowed and keep their insertion
//! order among equal keys.

use core::fmt;
use core::ops::Range;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::listable::Listable;

/// Ordered, mutable collection of immutable [`Listable`] elements.
///
/// [`insert`](SortedList::insert) is the only way an element gets in (the
/// `FromIterator`, `Extend` and `Deserialize` impls all go through it), so the
/// list is sorted after every public call and no operation needs the caller to
/// promise that it already is.
///
/// `Clone` produces an independent list: mutating the copy never affects the
/// original. The elements themselves are cloned; wrap them in `Arc` to share
/// one value between lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedList<T> {
    items: Vec<T>,
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Listable> SortedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index` (0-based).
    pub fn get(&self, index: usize) -> DomainResult<&T> {
        self.items
            .get(index)
            .ok_or_else(|| DomainError::out_of_range(index, self.items.len()))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Insert `item` after every element whose key is `<=` its key.
    ///
    /// A new duplicate therefore lands last among its equals.
    pub fn insert(&mut self, item: T) {
        let at = self
            .items
            .partition_point(|e| e.order_key() <= item.order_key());
        self.items.insert(at, item);
    }

    /// Insert a clone of every element of `other`, one at a time.
    ///
    /// The result does not depend on the order of `other`.
    pub fn insert_all(&mut self, other: &SortedList<T>) {
        self.items.reserve(other.len());
        for item in other {
            self.insert(item.clone());
        }
    }

    /// Remove one element matching `item`.
    ///
    /// When several elements match, the first one in sorted order goes.
    /// Returns `false` (and leaves the list untouched) when nothing matches.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(at) => {
                self.items.remove(at);
                true
            }
            None => false,
        }
    }

    /// Remove one matching element per element of `other`.
    ///
    /// Elements of `other` with nothing left to match are skipped, so on
    /// under-supply this is a partial removal. Returns how many were removed.
    pub fn remove_all(&mut self, other: &SortedList<T>) -> usize {
        other.iter().filter(|item| self.remove(item)).count()
    }

    /// Sum of every element's wholesale cost.
    pub fn total_wholesale_cost(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.wholesale_cost()))
    }

    /// Sum of every element's retail value.
    pub fn total_retail_value(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.retail_value()))
    }

    /// Multiplicity of `item`: how many elements match it.
    pub fn count(&self, item: &T) -> usize {
        self.items[self.key_run(item.order_key())]
            .iter()
            .filter(|e| e.matches(item))
            .count()
    }

    /// Whether at least one element matches `item`.
    pub fn check_availability(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Multiset containment: `true` iff every distinct element of `other`
    /// occurs here at least as many times as it occurs in `other`.
    pub fn check_availability_all(&self, other: &SortedList<T>) -> bool {
        other.iter().enumerate().all(|(i, wanted)| {
            // judge each equality class once, at its first occurrence
            let first_of_class = other.position(wanted) == Some(i);
            !first_of_class || other.count(wanted) <= self.count(wanted)
        })
    }

    /// Write the elements as `{open} a, b, c {close}`.
    ///
    /// `Display` uses square brackets; composites pick their own delimiters.
    pub fn fmt_delimited(
        &self,
        f: &mut fmt::Formatter<'_>,
        open: &str,
        close: &str,
    ) -> fmt::Result {
        write!(f, "{open} ")?;
        for (i, item) in self.items.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, " {close}")
    }

    /// Index range of the elements whose key equals `key`.
    fn key_run(&self, key: &str) -> Range<usize> {
        let start = self.items.partition_point(|e| e.order_key() < key);
        let len = self.items[start..].partition_point(|e| e.order_key() <= key);
        start..start + len
    }

    fn position(&self, item: &T) -> Option<usize> {
        let run = self.key_run(item.order_key());
        self.items[run.clone()]
            .iter()
            .position(|e| e.matches(item))
            .map(|offset| run.start + offset)
    }
}

impl<T: Listable> fmt::Display for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_delimited(f, "[", "]")
    }
}

impl<T: Listable> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Listable> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Serialize> Serialize for SortedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SortedList<T>
where
    T: Listable + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
