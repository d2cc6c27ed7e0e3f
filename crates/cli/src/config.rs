//! Runtime configuration read from the environment.

use std::path::PathBuf;

use stockroom_inventory::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD};

pub const INVENTORY_PATH_VAR: &str = "STOCKROOM_INVENTORY_PATH";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Stock file used by save/load.
    pub inventory_path: PathBuf,
    /// Items strictly below this quantity are reported as low.
    pub low_stock_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup (tests pass a closure
    /// instead of touching the process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let inventory_path = lookup(INVENTORY_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.inventory_path);

        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "{} is not an integer; using default {}",
                    LOW_STOCK_THRESHOLD_VAR,
                    DEFAULT_LOW_STOCK_THRESHOLD
                );
                defaults.low_stock_threshold
            }),
            None => defaults.low_stock_threshold,
        };

        Self {
            inventory_path,
            low_stock_threshold,
        }
    }
}
