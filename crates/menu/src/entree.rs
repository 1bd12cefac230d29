use serde::{Deserialize, Serialize};

use cafe_core::{Listable, SortedList};
use cafe_inventory::Food;

/// A dish on the menu: a name and the ingredients it consumes.
///
/// Immutable once built. Equality (`==`, [`Listable::matches`]) is by
/// **name only**: a menu treats two entrees with the same name as the same
/// dish whatever their recipes. Use [`Entree::deep_equals`] to compare
/// recipes as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entree {
    name: String,
    food_list: SortedList<Food>,
}

impl Entree {
    /// Build an entree holding its own copy of `food_list`.
    pub fn new(name: impl Into<String>, food_list: &SortedList<Food>) -> Self {
        Self {
            name: name.into(),
            food_list: food_list.clone(),
        }
    }

    /// Copy of the ingredient list; changing it does not change the entree.
    pub fn food_list(&self) -> SortedList<Food> {
        self.food_list.clone()
    }

    /// Same dish name, recipes ignored.
    pub fn same_name(&self, other: &Entree) -> bool {
        self.name == other.name
    }

    /// Same dish name *and* same ingredients in the same order.
    pub fn deep_equals(&self, other: &Entree) -> bool {
        self.same_name(other) && self.food_list == other.food_list
    }
}

impl PartialEq for Entree {
    fn eq(&self, other: &Self) -> bool {
        self.same_name(other)
    }
}

impl Eq for Entree {}

impl core::fmt::Display for Entree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.food_list.fmt_delimited(f, "<", ">")
    }
}

impl Listable for Entree {
    fn name(&self) -> &str {
        &self.name
    }

    fn wholesale_cost(&self) -> u64 {
        self.food_list.total_wholesale_cost()
    }

    fn retail_value(&self) -> u64 {
        self.food_list.total_retail_value()
    }

    fn matches(&self, other: &Self) -> bool {
        self.same_name(other)
    }
}
