use super::strategy::ScoringStrategy;
use crate::core::io::interfaces::InterfaceTable;
use crate::core::models::ids::ProteinId;
use crate::core::models::mutation::Mutation;

/// The boolean decision contract used by the classifier.
///
/// An implementation answers, for one mutation and one interaction partner of
/// the mutated protein, whether the interaction is predicted to be lost. It must
/// be a pure function of its inputs so that repeated runs produce identical
/// reports, and it must be shareable across threads so that classification can
/// run in parallel.
pub trait InteractionScorer: Send + Sync {
    /// Returns `true` if `mutation` is predicted to disrupt the interaction
    /// between its protein and `interactor`.
    fn is_disrupted(&self, mutation: &Mutation, interactor: &ProteinId) -> bool;
}

impl<F> InteractionScorer for F
where
    F: Fn(&Mutation, &ProteinId) -> bool + Send + Sync,
{
    fn is_disrupted(&self, mutation: &Mutation, interactor: &ProteinId) -> bool {
        self(mutation, interactor)
    }
}

/// Scores substitutions and, when interface data is available, only lets them
/// disrupt partners whose interface contains the mutated residue.
#[derive(Debug, Clone)]
pub struct InterfacePolicy {
    strategy: ScoringStrategy,
    interfaces: Option<InterfaceTable>,
}

impl InterfacePolicy {
    pub fn new(strategy: ScoringStrategy) -> Self {
        Self {
            strategy,
            interfaces: None,
        }
    }

    pub fn with_interfaces(mut self, interfaces: InterfaceTable) -> Self {
        self.interfaces = Some(interfaces);
        self
    }

    pub fn strategy(&self) -> &ScoringStrategy {
        &self.strategy
    }
}

impl InteractionScorer for InterfacePolicy {
    fn is_disrupted(&self, mutation: &Mutation, interactor: &ProteinId) -> bool {
        let Some(substitution) = &mutation.substitution else {
            return false;
        };

        if let Some(interfaces) = &self.interfaces {
            if !interfaces.is_interface_residue(
                mutation.protein.as_str(),
                interactor.as_str(),
                substitution.position,
            ) {
                return false;
            }
        }

        self.strategy.is_disruptive(substitution)
    }
}
