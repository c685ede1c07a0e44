use super::amino_acid::AminoAcid;
use super::ids::{MutationId, ProteinId};
use std::fmt;

/// A single residue change within the owning protein's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Substitution {
    pub position: u32, // 1-based residue number in the canonical isoform
    pub wild_type: AminoAcid,
    pub mutant: AminoAcid,
}

impl Substitution {
    pub fn new(position: u32, wild_type: AminoAcid, mutant: AminoAcid) -> Self {
        Self {
            position,
            wild_type,
            mutant,
        }
    }

    pub fn is_synonymous(&self) -> bool {
        self.wild_type == self.mutant
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.wild_type, self.position, self.mutant)
    }
}

/// A point mutation resolved to the protein it occurs in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mutation {
    pub id: MutationId,
    pub protein: ProteinId,
    pub substitution: Option<Substitution>,
}

impl Mutation {
    pub fn new(id: MutationId, protein: ProteinId) -> Self {
        Self {
            id,
            protein,
            substitution: None,
        }
    }

    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = Some(substitution);
        self
    }
}
