//! Human-readable stock report.

use std::io::{self, Write};

use crate::store::InventoryStore;

pub const REPORT_HEADER: &str = "Items Report";

impl InventoryStore {
    /// Write a blank line, the report header, then `"<name> -> <qty>"` per item.
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{REPORT_HEADER}")?;
        for (name, qty) in self.iter() {
            writeln!(out, "{name} -> {qty}")?;
        }
        Ok(())
    }

    /// Print the report to stdout.
    pub fn print_report(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(err) = self.write_report(&mut out) {
            tracing::warn!(error = %err, "failed to print inventory report");
        }
    }
}
