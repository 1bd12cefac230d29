//! Inventory domain module.
//!
//! Ingredients a restaurant buys, stocks and cooks with. Stock itself is a
//! [`cafe_core::SortedList`] of [`Food`]; this crate only defines the element.

pub mod food;

pub use food::Food;
