//! Scripted demonstration of the inventory store.

use std::io::Write;

use anyhow::Context;
use stockroom_inventory::InventoryStore;

use crate::config::Config;

/// Run the fixed demo script, writing console output to `out`.
///
/// add apple=10, add banana=2, remove apple=3, remove orange=1 (no-op),
/// print the apple quantity and the low items, save, load, print the report.
pub fn run_demo<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new();
    let mut log = Vec::new();

    store.add_item("apple", 10, Some(&mut log))?;
    store.add_item("banana", 2, Some(&mut log))?;
    store.remove_item("apple", 3)?;
    store.remove_item("orange", 1)?;

    writeln!(out, "Apple stock: {}", store.quantity("apple"))?;
    writeln!(out, "Low items: {:?}", store.low_items(config.low_stock_threshold))?;

    store
        .save(&config.inventory_path)
        .with_context(|| format!("failed to save inventory to {}", config.inventory_path.display()))?;

    let outcome = store.load(&config.inventory_path);
    tracing::info!(?outcome, "inventory reloaded");

    store.write_report(out).context("failed to write inventory report")?;

    for entry in &log {
        tracing::info!(entry = %entry, "stock log");
    }

    Ok(store)
}
