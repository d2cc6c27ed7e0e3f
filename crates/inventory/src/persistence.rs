//! JSON stock file persistence.
//!
//! The file is a single JSON object mapping item names to positive integer
//! quantities. It is always read and written wholesale.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use stockroom_core::ItemName;

/// Default location of the stock file, relative to the working directory.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// The stock map as persisted: item name -> quantity, ordered by name.
pub type StockMap = BTreeMap<ItemName, i64>;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("stock file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read stock file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed stock file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to serialize stock map: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write stock file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read and validate a stock file.
///
/// Every key must be a valid [`ItemName`] and every value a non-negative
/// integer; anything else is reported as [`PersistenceError::Malformed`].
/// Entries at zero are dropped from the returned map.
pub fn read_stock_file(path: impl AsRef<Path>) -> Result<StockMap, PersistenceError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PersistenceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PersistenceError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut stock: StockMap =
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if let Some((name, qty)) = stock.iter().find(|(_, qty)| **qty < 0) {
        return Err(PersistenceError::Malformed {
            path: path.to_path_buf(),
            reason: format!("quantity for '{name}' cannot be negative, found {qty}"),
        });
    }

    // Zero-quantity entries are valid on disk but never stocked.
    stock.retain(|_, qty| *qty > 0);

    Ok(stock)
}

/// Write the stock map as a 4-space indented JSON object, replacing the file.
pub fn write_stock_file(path: impl AsRef<Path>, stock: &StockMap) -> Result<(), PersistenceError> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    stock.serialize(&mut ser).map_err(PersistenceError::Serialize)?;

    std::fs::write(path, buf).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })
}
