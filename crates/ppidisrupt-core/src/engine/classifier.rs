use super::progress::{Progress, ProgressReporter};
use super::resolver::MutationResolver;
use crate::core::io::mutations::MutationSet;
use crate::core::models::classification::{ClassificationResult, MutationCalls};
use crate::core::models::ids::MutationId;
use crate::core::models::network::InteractionNetwork;
use crate::core::scoring::policy::InteractionScorer;
use rayon::prelude::*;
use tracing::{debug, info, instrument, trace};

/// Classification output plus the mutations that produced no calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub result: ClassificationResult,
    pub unresolved: Vec<MutationId>,
    pub without_partners: Vec<MutationId>,
}

enum Outcome {
    Unresolved(MutationId),
    WithoutPartners(MutationId),
    Classified(MutationCalls),
}

fn classify_one(
    id: &MutationId,
    network: &InteractionNetwork,
    resolver: &dyn MutationResolver,
    scorer: &dyn InteractionScorer,
) -> Outcome {
    let Some(mutation) = resolver.resolve(id) else {
        trace!(mutation = %id, "Mutation could not be resolved to a protein.");
        return Outcome::Unresolved(id.clone());
    };

    let Some(partners) = network.neighbors(mutation.protein.as_str()) else {
        trace!(mutation = %id, protein = %mutation.protein, "Protein has no interactions.");
        return Outcome::WithoutPartners(id.clone());
    };

    let mut calls = MutationCalls::new(mutation);
    for partner in partners {
        let disrupted = scorer.is_disrupted(&calls.mutation, partner);
        calls.record(partner.clone(), disrupted);
    }
    Outcome::Classified(calls)
}

/// Calls every network partner of every mutation's protein.
///
/// Mutations are processed independently. With `parallel` set the work is
/// spread over the rayon pool; results are collected in input order either way,
/// so the output does not depend on scheduling.
#[instrument(skip_all, name = "classification_task", fields(mutations = mutations.len(), parallel = parallel))]
pub fn classify(
    network: &InteractionNetwork,
    mutations: &MutationSet,
    resolver: &dyn MutationResolver,
    scorer: &dyn InteractionScorer,
    reporter: &ProgressReporter,
    parallel: bool,
) -> Classification {
    reporter.report(Progress::TaskStart {
        total_steps: mutations.len() as u64,
    });

    let run = |id: &MutationId| {
        let outcome = classify_one(id, network, resolver, scorer);
        reporter.report(Progress::TaskIncrement);
        outcome
    };

    let outcomes: Vec<Outcome> = if parallel {
        mutations.as_slice().par_iter().map(run).collect()
    } else {
        mutations.as_slice().iter().map(run).collect()
    };

    reporter.report(Progress::TaskFinish);

    let mut classification = Classification::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Unresolved(id) => classification.unresolved.push(id),
            Outcome::WithoutPartners(id) => classification.without_partners.push(id),
            Outcome::Classified(calls) => classification.result.push(calls),
        }
    }

    debug!(
        unresolved = classification.unresolved.len(),
        without_partners = classification.without_partners.len(),
        "Mutations contributing no calls."
    );
    info!(
        "Classified {} mutation(s): {} interaction(s) scored, {} predicted disrupted.",
        classification.result.mutation_count(),
        classification.result.call_count(),
        classification.result.disrupted_count()
    );

    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::annotations::AnnotationTable;
    use crate::core::models::amino_acid::AminoAcid;
    use crate::core::models::ids::ProteinId;
    use crate::core::models::mutation::{Mutation, Substitution};
    use crate::core::scoring::matrix::SubstitutionMatrix;
    use crate::core::scoring::policy::InterfacePolicy;
    use crate::core::scoring::strategy::ScoringStrategy;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn network(edges: &[(&str, &str)]) -> InteractionNetwork {
        let mut net = InteractionNetwork::new();
        for (a, b) in edges {
            net.add_interaction(ProteinId::new(*a), ProteinId::new(*b));
        }
        net
    }

    fn annotate(pairs: &[(&str, &str)]) -> AnnotationTable {
        let mut table = AnnotationTable::new();
        for (id, protein) in pairs {
            table.insert(Mutation::new(MutationId::new(*id), ProteinId::new(*protein)));
        }
        table
    }

    fn mutations(ids: &[&str]) -> MutationSet {
        ids.iter().map(|id| MutationId::new(*id)).collect()
    }

    fn always(_: &Mutation, _: &ProteinId) -> bool {
        true
    }

    #[test]
    fn one_call_per_neighbor() {
        let net = network(&[("HUB", "X"), ("HUB", "Y"), ("Z", "HUB"), ("X", "Y")]);
        let out = classify(
            &net,
            &mutations(&["rs1"]),
            &annotate(&[("rs1", "HUB")]),
            &always,
            &ProgressReporter::new(),
            false,
        );

        let calls = out.result.get("rs1").unwrap();
        let partners: Vec<_> = calls
            .partners
            .iter()
            .map(|c| c.interactor.as_str())
            .collect();
        assert_eq!(partners, vec!["X", "Y", "Z"]);
        assert!(calls.partners.iter().all(|c| c.disrupted));
    }

    #[test]
    fn protein_absent_from_network_yields_no_entries() {
        let net = network(&[("P1", "P2")]);
        let out = classify(
            &net,
            &mutations(&["rs1"]),
            &annotate(&[("rs1", "ORPHAN")]),
            &always,
            &ProgressReporter::new(),
            false,
        );
        assert!(out.result.is_empty());
        assert_eq!(out.without_partners, vec![MutationId::new("rs1")]);
        assert!(out.unresolved.is_empty());
    }

    #[test]
    fn unresolvable_mutations_are_reported_separately() {
        let net = network(&[("P1", "P2")]);
        let out = classify(
            &net,
            &mutations(&["rs1", "rs2"]),
            &annotate(&[("rs1", "P1")]),
            &always,
            &ProgressReporter::new(),
            false,
        );
        assert_eq!(out.result.mutation_count(), 1);
        assert_eq!(out.unresolved, vec![MutationId::new("rs2")]);
    }

    #[test]
    fn result_keeps_mutation_input_order() {
        let net = network(&[("A", "B"), ("C", "D")]);
        let out = classify(
            &net,
            &mutations(&["rs9", "rs1", "rs5"]),
            &annotate(&[("rs1", "A"), ("rs5", "C"), ("rs9", "B")]),
            &always,
            &ProgressReporter::new(),
            false,
        );
        let order: Vec<_> = out.result.iter().map(|c| c.mutation.id.as_str()).collect();
        assert_eq!(order, vec!["rs9", "rs1", "rs5"]);
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let mut edges = Vec::new();
        let names: Vec<String> = (0..50).map(|i| format!("P{}", i)).collect();
        for i in 0..50 {
            edges.push((names[i].as_str(), names[(i * 7 + 3) % 50].as_str()));
            edges.push((names[i].as_str(), names[(i * 11 + 5) % 50].as_str()));
        }
        let net = network(&edges);

        let mut table = AnnotationTable::new();
        let ids: Vec<String> = (0..200).map(|i| format!("rs{}", i)).collect();
        for (i, id) in ids.iter().enumerate() {
            let wt = AminoAcid::ALL[i % 20];
            let mt = AminoAcid::ALL[(i * 3 + 1) % 20];
            table.insert(
                Mutation::new(MutationId::new(id.as_str()), ProteinId::new(names[i % 50].as_str()))
                    .with_substitution(Substitution::new(i as u32, wt, mt)),
            );
        }
        let set: MutationSet = ids.iter().map(|id| MutationId::new(id.as_str())).collect();
        let policy =
            InterfacePolicy::new(ScoringStrategy::substitution(SubstitutionMatrix::blosum62()));

        let sequential = classify(&net, &set, &table, &policy, &ProgressReporter::new(), false);
        let parallel = classify(&net, &set, &table, &policy, &ProgressReporter::new(), true);
        assert_eq!(sequential, parallel);
        assert!(sequential.result.disrupted_count() > 0);
    }

    #[test]
    fn reports_one_increment_per_mutation() {
        let increments = AtomicU64::new(0);
        let total = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::TaskStart { total_steps } => total.store(total_steps, Ordering::SeqCst),
            Progress::TaskIncrement => {
                increments.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }));

        let net = network(&[("P1", "P2")]);
        classify(
            &net,
            &mutations(&["rs1", "rs2", "rs3"]),
            &annotate(&[("rs1", "P1")]),
            &always,
            &reporter,
            true,
        );
        drop(reporter);
        assert_eq!(total.load(Ordering::SeqCst), 3);
        assert_eq!(increments.load(Ordering::SeqCst), 3);
    }
}
