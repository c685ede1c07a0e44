use super::source::SourceError;
use super::traits::TabularSource;
use crate::core::models::ids::ProteinId;
use crate::core::models::network::InteractionNetwork;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

const FIELD_SEPARATOR: char = '\t';

#[derive(Debug, Error)]
pub enum NetworkLoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("I/O error while reading interaction network: {0}")]
    Io(#[from] io::Error),
}

/// Splits an edge-list line into exactly two protein identifiers.
fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.trim().split(FIELD_SEPARATOR);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) => Some((a, b)),
        _ => None,
    }
}

impl TabularSource for InteractionNetwork {
    type Error = NetworkLoadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut network = InteractionNetwork::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            match parse_edge(&line) {
                Some((a, b)) => {
                    network.add_interaction(ProteinId::from(a), ProteinId::from(b));
                }
                None => skipped += 1,
            }
        }

        debug!(
            proteins = network.protein_count(),
            interactions = network.interaction_count(),
            skipped,
            "Parsed interaction network."
        );
        Ok(network)
    }
}
