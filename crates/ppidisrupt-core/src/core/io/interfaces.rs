use super::source::SourceError;
use super::traits::TabularSource;
use crate::core::models::ids::ProteinId;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum InterfaceLoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Failed to read interface table: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct InterfaceRecord {
    protein_id: String,
    interactor_id: String,
    position: u32,
}

/// Residue positions of each protein that lie in the interface with a given partner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceTable {
    interfaces: HashMap<ProteinId, HashMap<ProteinId, BTreeSet<u32>>>,
}

impl InterfaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, protein: ProteinId, interactor: ProteinId, position: u32) {
        self.interfaces
            .entry(protein)
            .or_default()
            .entry(interactor)
            .or_default()
            .insert(position);
    }

    /// Interface positions of `protein` towards `interactor`, if any were recorded.
    pub fn interface(&self, protein: &str, interactor: &str) -> Option<&BTreeSet<u32>> {
        self.interfaces.get(protein)?.get(interactor)
    }

    pub fn is_interface_residue(&self, protein: &str, interactor: &str, position: u32) -> bool {
        self.interface(protein, interactor)
            .is_some_and(|positions| positions.contains(&position))
    }

    pub fn len(&self) -> usize {
        self.interfaces.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl TabularSource for InterfaceTable {
    type Error = InterfaceLoadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut table = InterfaceTable::new();
        for result in csv_reader.deserialize::<InterfaceRecord>() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping malformed interface record: {}", e);
                    continue;
                }
            };
            table.insert(
                ProteinId::from(record.protein_id),
                ProteinId::from(record.interactor_id),
                record.position,
            );
        }

        debug!(pairs = table.len(), "Parsed interface residue table.");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TABLE: &str = "protein_id\tinteractor_id\tposition\n\
                         P1\tP2\t10\n\
                         P1\tP2\t12\n\
                         P1\tP3\t40\n\
                         P2\tP1\t7\n";

    #[test]
    fn interfaces_are_directional_per_pair() {
        let table = InterfaceTable::read_from(&mut Cursor::new(TABLE)).unwrap();
        assert!(table.is_interface_residue("P1", "P2", 10));
        assert!(table.is_interface_residue("P1", "P2", 12));
        assert!(!table.is_interface_residue("P1", "P2", 40));
        assert!(table.is_interface_residue("P1", "P3", 40));
        assert!(table.is_interface_residue("P2", "P1", 7));
        assert!(!table.is_interface_residue("P2", "P1", 10));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn unknown_pairs_have_no_interface() {
        let table = InterfaceTable::read_from(&mut Cursor::new(TABLE)).unwrap();
        assert!(table.interface("P3", "P1").is_none());
        assert!(table.interface("P9", "P2").is_none());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let content = "protein_id\tinteractor_id\tposition\nP1\tP2\tnot-a-number\nP1\tP2\t5\n";
        let table = InterfaceTable::read_from(&mut Cursor::new(content)).unwrap();
        assert_eq!(table.interface("P1", "P2").map(BTreeSet::len), Some(1));
    }
}
