use cafe_core::{Listable, SortedList};
use cafe_inventory::Food;
use cafe_menu::Entree;

use crate::config::RestaurantConfig;

/// Aggregate: Restaurant.
///
/// Owns a menu, an ingredient inventory and a cash balance (smallest currency
/// unit, e.g. cents). Not synchronized: share it across threads behind a
/// single lock, since shipments and orders each touch inventory and cash
/// together.
#[derive(Debug, Clone)]
pub struct Restaurant {
    name: String,
    menu: SortedList<Entree>,
    inventory: SortedList<Food>,
    cash: i64,
}

impl Restaurant {
    /// Open a restaurant with an empty menu and inventory.
    ///
    /// `starting_cash` is taken as given, negative included.
    pub fn new(name: impl Into<String>, starting_cash: i64) -> Self {
        Self {
            name: name.into(),
            menu: SortedList::new(),
            inventory: SortedList::new(),
            cash: starting_cash,
        }
    }

    pub fn from_config(config: &RestaurantConfig) -> Self {
        Self::new(config.name.clone(), config.starting_cash)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cash(&self) -> i64 {
        self.cash
    }

    /// Copy of the menu.
    pub fn menu(&self) -> SortedList<Entree> {
        self.menu.clone()
    }

    /// Copy of the inventory.
    pub fn inventory(&self) -> SortedList<Food> {
        self.inventory.clone()
    }

    /// Add `entree` to the menu. Entrees sharing a name are all kept.
    pub fn add_entree(&mut self, entree: Entree) {
        tracing::debug!(restaurant = %self.name, entree = entree.name(), "entree added to menu");
        self.menu.insert(entree);
    }

    /// Whether every ingredient of `entree` is in stock, counting duplicates.
    pub fn check_if_in_inventory(&self, entree: &Entree) -> bool {
        self.inventory.check_availability_all(&entree.food_list())
    }

    /// Buy `shipment` if its wholesale cost fits in the cash on hand.
    ///
    /// Returns `false` and changes nothing when the restaurant cannot pay.
    pub fn add_shipment_to_inventory(&mut self, shipment: &SortedList<Food>) -> bool {
        let total = shipment.total_wholesale_cost();
        let Some(cost) = i64::try_from(total).ok().filter(|cost| *cost <= self.cash) else {
            tracing::debug!(
                restaurant = %self.name,
                cost = total,
                cash = self.cash,
                "shipment declined: insufficient cash"
            );
            return false;
        };

        self.inventory.insert_all(shipment);
        self.cash -= cost;

        tracing::info!(
            restaurant = %self.name,
            items = shipment.len(),
            cost,
            cash = self.cash,
            "shipment received"
        );
        true
    }

    /// Cook and sell `entree` if all its ingredients are in stock.
    ///
    /// On success the ingredients leave the inventory and the entree's retail
    /// value is added to cash. Returns `false` and changes nothing otherwise.
    pub fn place_order(&mut self, entree: &Entree) -> bool {
        if !self.check_if_in_inventory(entree) {
            tracing::debug!(
                restaurant = %self.name,
                entree = entree.name(),
                "order declined: ingredients not in stock"
            );
            return false;
        }

        let revenue = i64::try_from(entree.retail_value()).unwrap_or(i64::MAX);
        self.inventory.remove_all(&entree.food_list());
        self.cash = self.cash.saturating_add(revenue);

        tracing::info!(
            restaurant = %self.name,
            entree = entree.name(),
            revenue,
            cash = self.cash,
            "order placed"
        );
        true
    }
}
