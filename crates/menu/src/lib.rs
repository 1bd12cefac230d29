//! Menu domain module.
//!
//! Entrees are named recipes: a bundle of [`cafe_inventory::Food`] that must
//! be in stock before the dish can be sold.

pub mod entree;

pub use entree::Entree;
