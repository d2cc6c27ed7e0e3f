//! In-memory stock map with add/remove/query and whole-file load/save.

use std::path::Path;

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::log::LogEntry;
use crate::persistence::{self, PersistenceError, StockMap};

/// Threshold used by [`InventoryStore::low_items_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Result of a single stock mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockChange {
    /// The item is stocked with this (strictly positive) quantity.
    Stocked(i64),
    /// The item fell to zero or below and its entry was deleted.
    Depleted,
    /// The item was not stocked before and is not stocked now.
    Untracked,
}

/// Result of [`InventoryStore::load`].
///
/// Every variant other than `Loaded` means the store was reset to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { items: usize },
    Missing,
    Unreadable(String),
    Malformed(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// In-memory inventory: item name -> quantity.
///
/// Invariant: every stored quantity is strictly positive. Any mutation that
/// leaves an item at zero or below deletes its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    stock: StockMap,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of `name`, creating the entry if needed.
    ///
    /// `qty` may be zero or negative. On success, appends an
    /// `"Added <qty> of <name>"` entry to `log` when one is supplied.
    /// Validation and overflow errors leave both the store and the log untouched.
    pub fn add_item(
        &mut self,
        name: &str,
        qty: i64,
        log: Option<&mut Vec<LogEntry>>,
    ) -> DomainResult<StockChange> {
        let name = ItemName::parse(name)?;
        let existed = self.stock.contains_key(&name);
        let current = self.stock.get(&name).copied().unwrap_or(0);

        let updated = current
            .checked_add(qty)
            .ok_or_else(|| DomainError::invariant(format!("quantity overflow adding to '{name}'")))?;

        if let Some(log) = log {
            log.push(LogEntry::added(&name, qty, Utc::now()));
        }

        let change = if updated > 0 {
            tracing::debug!(item = %name, qty, quantity = updated, "stock added");
            self.stock.insert(name, updated);
            StockChange::Stocked(updated)
        } else if existed {
            tracing::debug!(item = %name, qty, "stock depleted by addition");
            self.stock.remove(&name);
            StockChange::Depleted
        } else {
            StockChange::Untracked
        };

        Ok(change)
    }

    /// Remove `qty` of `name`.
    ///
    /// Removing an item that is not stocked is a no-op reported as
    /// [`StockChange::Untracked`].
    pub fn remove_item(&mut self, name: &str, qty: i64) -> DomainResult<StockChange> {
        let Some(current) = self.stock.get(name).copied() else {
            tracing::debug!(item = name, qty, "remove ignored, item not stocked");
            return Ok(StockChange::Untracked);
        };

        let remaining = current
            .checked_sub(qty)
            .ok_or_else(|| DomainError::invariant(format!("quantity overflow removing from '{name}'")))?;

        if remaining <= 0 {
            self.stock.remove(name);
            tracing::debug!(item = name, qty, "stock depleted");
            return Ok(StockChange::Depleted);
        }

        if let Some(slot) = self.stock.get_mut(name) {
            *slot = remaining;
        }
        tracing::debug!(item = name, qty, quantity = remaining, "stock removed");
        Ok(StockChange::Stocked(remaining))
    }

    /// Current quantity, or 0 when the item is not stocked.
    pub fn quantity(&self, name: &str) -> i64 {
        self.stock.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stock.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Stocked items in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.stock.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn clear(&mut self) {
        self.stock.clear();
    }

    /// Names of stocked items with quantity strictly below `threshold`.
    ///
    /// Only present entries are scanned; deleted items never show up here.
    pub fn low_items(&self, threshold: i64) -> Vec<&str> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn low_items_default(&self) -> Vec<&str> {
        self.low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Replace the whole stock map with the contents of the file at `path`.
    ///
    /// Any read failure (missing file, IO error, malformed content) resets the
    /// store to empty; the prior state is never kept and nothing is merged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();

        match persistence::read_stock_file(path) {
            Ok(stock) => {
                let items = stock.len();
                self.stock = stock;
                tracing::info!(path = %path.display(), items, "inventory loaded");
                LoadOutcome::Loaded { items }
            }
            Err(err) => {
                self.stock.clear();
                tracing::warn!(path = %path.display(), error = %err, "inventory reset after failed load");
                match err {
                    PersistenceError::NotFound { .. } => LoadOutcome::Missing,
                    PersistenceError::Malformed { reason, .. } => LoadOutcome::Malformed(reason),
                    other => LoadOutcome::Unreadable(other.to_string()),
                }
            }
        }
    }

    /// Write the whole stock map to `path`, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        persistence::write_stock_file(path, &self.stock)?;
        tracing::info!(path = %path.display(), items = self.stock.len(), "inventory saved");
        Ok(())
    }
}
