//! Inventory stock tracking.
//!
//! An in-memory stock map ([`InventoryStore`]) with add/remove/query
//! operations, low-stock reporting, and whole-file JSON persistence.
//! The store is a plain owned value; callers that share it across threads
//! bring their own synchronization.

pub mod log;
pub mod persistence;
pub mod report;
pub mod store;

pub use log::LogEntry;
pub use persistence::{DEFAULT_INVENTORY_PATH, PersistenceError, StockMap};
pub use report::REPORT_HEADER;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, LoadOutcome, StockChange};
