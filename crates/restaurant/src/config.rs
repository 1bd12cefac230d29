//! Restaurant settings read from the environment.

use cafe_core::{DomainError, DomainResult};

/// Environment variable holding the restaurant name.
pub const NAME_VAR: &str = "CAFE_NAME";

/// Environment variable holding the opening cash balance, in cents.
pub const STARTING_CASH_VAR: &str = "CAFE_STARTING_CASH";

/// Settings needed to open a [`Restaurant`](crate::Restaurant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantConfig {
    pub name: String,
    pub starting_cash: i64,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: "Cafe".to_string(),
            starting_cash: 0,
        }
    }
}

impl RestaurantConfig {
    /// Read `CAFE_NAME` and `CAFE_STARTING_CASH` from the process environment.
    ///
    /// Missing values fall back to the defaults with a warning; a cash value
    /// that is set but not an integer is an error.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let defaults = Self::default();

        let name = match lookup(NAME_VAR) {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                tracing::warn!("{NAME_VAR} not set; using default {:?}", defaults.name);
                defaults.name
            }
        };

        let starting_cash = match lookup(STARTING_CASH_VAR) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                DomainError::invalid_config(format!("{STARTING_CASH_VAR}={raw:?}: {e}"))
            })?,
            None => {
                tracing::warn!(
                    "{STARTING_CASH_VAR} not set; using default {}",
                    defaults.starting_cash
                );
                defaults.starting_cash
            }
        };

        Ok(Self {
            name,
            starting_cash,
        })
    }
}
