use serde::{Deserialize, Serialize};

use cafe_core::{DomainError, DomainResult, Listable};

/// An ingredient: name plus what it costs to buy and what it earns when sold.
///
/// Amounts are in the smallest currency unit (e.g., cents). Two foods are the
/// same food only when name *and* both amounts agree, so a 50-cent bun and a
/// 60-cent bun sort next to each other but never stand in for one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FoodRecord")]
pub struct Food {
    name: String,
    wholesale_cost: u32,
    retail_value: u32,
}

impl Food {
    pub fn new(
        name: impl Into<String>,
        wholesale_cost: u32,
        retail_value: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("food name cannot be empty"));
        }
        Ok(Self {
            name,
            wholesale_cost,
            retail_value,
        })
    }
}

impl core::fmt::Display for Food {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Listable for Food {
    fn name(&self) -> &str {
        &self.name
    }

    fn wholesale_cost(&self) -> u64 {
        u64::from(self.wholesale_cost)
    }

    fn retail_value(&self) -> u64 {
        u64::from(self.retail_value)
    }

    fn matches(&self, other: &Self) -> bool {
        self == other
    }
}

/// Wire shape of [`Food`]; converted through [`Food::new`] so that
/// deserialized values are validated too.
#[derive(Deserialize)]
struct FoodRecord {
    name: String,
    wholesale_cost: u32,
    retail_value: u32,
}

impl TryFrom<FoodRecord> for Food {
    type Error = DomainError;

    fn try_from(record: FoodRecord) -> Result<Self, Self::Error> {
        Food::new(record.name, record.wholesale_cost, record.retail_value)
    }
}
