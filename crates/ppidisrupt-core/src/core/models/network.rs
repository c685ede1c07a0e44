use super::ids::ProteinId;
use std::collections::{BTreeSet, HashMap};

/// Undirected protein-protein interaction network.
///
/// Stored as an adjacency map from each protein to the ordered set of its
/// partners. Every insertion goes through [`InteractionNetwork::add_interaction`],
/// which writes both directions, so the neighbor relation is always symmetric
/// and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionNetwork {
    adjacency: HashMap<ProteinId, BTreeSet<ProteinId>>,
    interaction_count: usize,
}

impl InteractionNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an undirected interaction. Returns `false` if it was already present.
    pub fn add_interaction(&mut self, a: ProteinId, b: ProteinId) -> bool {
        let inserted = self
            .adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        if inserted {
            self.interaction_count += 1;
        }
        inserted
    }

    pub fn neighbors(&self, protein: &str) -> Option<&BTreeSet<ProteinId>> {
        self.adjacency.get(protein)
    }

    pub fn contains(&self, protein: &str) -> bool {
        self.adjacency.contains_key(protein)
    }

    pub fn interacts(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|partners| partners.contains(b))
    }

    pub fn proteins(&self) -> impl Iterator<Item = &ProteinId> {
        self.adjacency.keys()
    }

    pub fn protein_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn interaction_count(&self) -> usize {
        self.interaction_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
