//! Fleet store
//!
//! Holds the ordered list of boats for the lifetime of the process and knows
//! how to fill it from a bulk CSV file or a saved snapshot, and how to write
//! it back out.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{FleetError, FleetResult};
use crate::import::{self, ImportBatch};
use crate::models::{Boat, ExpenseDecision, Money};

use super::file_io::{read_json_required, write_json_atomic};

/// Serializable snapshot structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SnapshotData {
    boats: Vec<Boat>,
}

/// Counts reported after a bulk import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Aggregate totals across the whole fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetTotals {
    pub paid: Money,
    pub spent: Money,
}

/// In-memory boat collection; insertion order is display order
#[derive(Debug, Default)]
pub struct FleetStore {
    boats: Vec<Boat>,
}

impl FleetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk import a delimited file, appending every well-formed record
    pub fn import_delimited<P: AsRef<Path>>(&mut self, path: P) -> FleetResult<ImportSummary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            FleetError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;

        self.import_from_reader(BufReader::new(file))
    }

    /// Bulk import from any reader
    pub fn import_from_reader<R: Read>(&mut self, reader: R) -> FleetResult<ImportSummary> {
        let ImportBatch { boats, skipped } = import::read_boats(reader)?;
        let imported = boats.len();
        self.boats.extend(boats);

        Ok(ImportSummary { imported, skipped })
    }

    /// Append the boats from a saved snapshot
    ///
    /// On any failure the store is left untouched. Returns the number of
    /// boats added.
    pub fn load_snapshot<P: AsRef<Path>>(&mut self, path: P) -> FleetResult<usize> {
        let data: SnapshotData = read_json_required(path)?;
        let count = data.boats.len();
        self.boats.extend(data.boats);
        Ok(count)
    }

    /// Write the whole fleet to a snapshot file, replacing any previous one
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> FleetResult<()> {
        let data = SnapshotData {
            boats: self.boats.clone(),
        };
        write_json_atomic(path, &data)
    }

    /// All boats in insertion order
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn iter(&self) -> impl Iterator<Item = &Boat> {
        self.boats.iter()
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// Sum of purchase prices and of expenses across the fleet
    ///
    /// Fails with a validation error if either sum leaves the `Money` range.
    pub fn totals(&self) -> FleetResult<FleetTotals> {
        let overflow = |what: &str| {
            FleetError::Validation(format!("fleet {} total is out of range", what))
        };

        let paid = Money::checked_sum(self.boats.iter().map(Boat::purchase_price))
            .ok_or_else(|| overflow("purchase price"))?;
        let spent = Money::checked_sum(self.boats.iter().map(Boat::expenses))
            .ok_or_else(|| overflow("expense"))?;

        Ok(FleetTotals { paid, spent })
    }

    /// Append an already-built boat
    pub fn add(&mut self, boat: Boat) -> &Boat {
        self.boats.push(boat);
        &self.boats[self.boats.len() - 1]
    }

    /// Parse one delimited record and append it; nothing is added on error
    pub fn add_record(&mut self, line: &str) -> FleetResult<&Boat> {
        let boat = import::parse_line(line)?;
        Ok(self.add(boat))
    }

    /// First boat whose name matches, ignoring case
    pub fn find(&self, name: &str) -> Option<&Boat> {
        self.boats.iter().find(|b| b.matches_name(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Boat> {
        self.boats.iter_mut().find(|b| b.matches_name(name))
    }

    /// Remove the first boat whose name matches, ignoring case
    pub fn remove(&mut self, name: &str) -> Option<Boat> {
        let index = self.boats.iter().position(|b| b.matches_name(name))?;
        Some(self.boats.remove(index))
    }

    /// Charge an expense against the first boat whose name matches
    pub fn charge_expense(&mut self, name: &str, amount: Money) -> FleetResult<ExpenseDecision> {
        let boat = self
            .find_mut(name)
            .ok_or_else(|| FleetError::boat_not_found(name.trim()))?;

        boat.charge(amount)
    }
}
