use super::source::SourceError;
use super::traits::TabularSource;
use crate::core::models::amino_acid::AminoAcid;
use crate::core::models::ids::{MutationId, ProteinId};
use crate::core::models::mutation::{Mutation, Substitution};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum AnnotationLoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Failed to read mutation annotations: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct AnnotationRecord {
    mutation_id: String,
    protein_id: String,
    position: Option<u32>,
    wild_type: Option<String>,
    mutant: Option<String>,
}

impl AnnotationRecord {
    fn substitution(&self) -> Result<Option<Substitution>, String> {
        match (self.position, &self.wild_type, &self.mutant) {
            (None, None, None) => Ok(None),
            (Some(position), Some(wild_type), Some(mutant)) => {
                let wild_type = wild_type.parse::<AminoAcid>().map_err(|e| e.to_string())?;
                let mutant = mutant.parse::<AminoAcid>().map_err(|e| e.to_string())?;
                Ok(Some(Substitution::new(position, wild_type, mutant)))
            }
            _ => Err("position, wild_type and mutant must be given together".to_string()),
        }
    }
}

/// Local lookup table from dbSNP identifiers to the protein-level consequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationTable {
    entries: HashMap<MutationId, Mutation>,
}

impl AnnotationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an annotation unless one already exists for the same identifier.
    pub fn insert(&mut self, mutation: Mutation) -> bool {
        if self.entries.contains_key(&mutation.id) {
            return false;
        }
        self.entries.insert(mutation.id.clone(), mutation);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Mutation> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TabularSource for AnnotationTable {
    type Error = AnnotationLoadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut table = AnnotationTable::new();
        let mut skipped = 0usize;

        for result in csv_reader.deserialize::<AnnotationRecord>() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping malformed annotation record: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            let substitution = match record.substitution() {
                Ok(substitution) => substitution,
                Err(reason) => {
                    warn!(
                        "Skipping annotation for {}: {}",
                        record.mutation_id, reason
                    );
                    skipped += 1;
                    continue;
                }
            };

            let mut mutation = Mutation::new(
                MutationId::from(record.mutation_id),
                ProteinId::from(record.protein_id),
            );
            mutation.substitution = substitution;
            table.insert(mutation);
        }

        debug!(
            annotations = table.len(),
            skipped, "Parsed mutation annotation table."
        );
        Ok(table)
    }
}
