//! Restaurant domain module.
//!
//! Bookkeeping for one restaurant: its menu, its ingredient stock and its
//! cash. Shipments spend cash to add stock; orders consume stock and earn
//! cash. Both are all-or-nothing and report a declined transaction as
//! `false`, not as an error.

pub mod config;
pub mod restaurant;

pub use config::RestaurantConfig;
pub use restaurant::Restaurant;
