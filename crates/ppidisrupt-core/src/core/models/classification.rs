use super::ids::ProteinId;
use super::mutation::Mutation;

/// The disruption call for one interaction partner of a mutated protein.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerCall {
    pub interactor: ProteinId,
    pub disrupted: bool,
}

/// All partner calls made for a single mutation, in neighbor order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationCalls {
    pub mutation: Mutation,
    pub partners: Vec<PartnerCall>,
}

impl MutationCalls {
    pub fn new(mutation: Mutation) -> Self {
        Self {
            mutation,
            partners: Vec::new(),
        }
    }

    pub fn record(&mut self, interactor: ProteinId, disrupted: bool) {
        self.partners.push(PartnerCall {
            interactor,
            disrupted,
        });
    }

    pub fn disrupted(&self) -> impl Iterator<Item = &ProteinId> {
        self.partners
            .iter()
            .filter(|call| call.disrupted)
            .map(|call| &call.interactor)
    }
}

/// Per-mutation, per-partner disruption calls, in mutation input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    entries: Vec<MutationCalls>,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, calls: MutationCalls) {
        self.entries.push(calls);
    }

    pub fn get(&self, mutation_id: &str) -> Option<&MutationCalls> {
        self.entries
            .iter()
            .find(|calls| calls.mutation.id.as_str() == mutation_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MutationCalls> {
        self.entries.iter()
    }

    /// Flattened `(mutation, call)` pairs in report order.
    pub fn rows(&self) -> impl Iterator<Item = (&Mutation, &PartnerCall)> {
        self.entries
            .iter()
            .flat_map(|calls| calls.partners.iter().map(move |call| (&calls.mutation, call)))
    }

    pub fn mutation_count(&self) -> usize {
        self.entries.len()
    }

    pub fn call_count(&self) -> usize {
        self.entries.iter().map(|calls| calls.partners.len()).sum()
    }

    pub fn disrupted_count(&self) -> usize {
        self.rows().filter(|(_, call)| call.disrupted).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MutationCalls> for ClassificationResult {
    fn from_iter<I: IntoIterator<Item = MutationCalls>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::MutationId;

    fn calls(id: &str, protein: &str, partners: &[(&str, bool)]) -> MutationCalls {
        let mut calls = MutationCalls::new(Mutation::new(
            MutationId::new(id),
            ProteinId::new(protein),
        ));
        for (partner, disrupted) in partners {
            calls.record(ProteinId::new(*partner), *disrupted);
        }
        calls
    }

    #[test]
    fn rows_follow_mutation_then_partner_order() {
        let result: ClassificationResult = vec![
            calls("rs2", "P2", &[("P1", true), ("P3", false)]),
            calls("rs1", "P9", &[("P8", true)]),
        ]
        .into_iter()
        .collect();

        let rows: Vec<_> = result
            .rows()
            .map(|(m, c)| (m.id.as_str(), c.interactor.as_str()))
            .collect();
        assert_eq!(rows, vec![("rs2", "P1"), ("rs2", "P3"), ("rs1", "P8")]);
    }

    #[test]
    fn counts_summarize_calls() {
        let result: ClassificationResult = vec![
            calls("rs1", "P1", &[("P2", true), ("P3", false)]),
            calls("rs2", "P4", &[]),
        ]
        .into_iter()
        .collect();

        assert_eq!(result.mutation_count(), 2);
        assert_eq!(result.call_count(), 2);
        assert_eq!(result.disrupted_count(), 1);
        let disrupted: Vec<_> = result.get("rs1").unwrap().disrupted().collect();
        assert_eq!(disrupted, vec![&ProteinId::new("P2")]);
    }
}
