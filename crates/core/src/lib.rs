//! `cafe-core`: foundation building blocks shared by every cafe crate.
//!
//! This crate contains the **sorted multiset** that backs every list in the
//! system, the element contract it relies on, and the shared error model.

pub mod error;
pub mod listable;
pub mod sorted_list;

pub use error::{DomainError, DomainResult};
pub use listable::Listable;
pub use sorted_list::SortedList;
