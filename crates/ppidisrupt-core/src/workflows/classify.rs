use crate::core::io::annotations::AnnotationTable;
use crate::core::io::interfaces::InterfaceTable;
use crate::core::io::mutations::{MutationLoadError, MutationSet};
use crate::core::io::report::DisruptionReport;
use crate::core::io::source::open_source;
use crate::core::io::traits::TabularSource;
use crate::core::models::classification::ClassificationResult;
use crate::core::models::ids::MutationId;
use crate::core::models::network::InteractionNetwork;
use crate::core::scoring::matrix::SubstitutionMatrix;
use crate::core::scoring::policy::{InteractionScorer, InterfacePolicy};
use crate::core::scoring::strategy::ScoringStrategy;
use crate::engine::classifier::classify;
use crate::engine::config::{
    ClassificationConfig, MutationLocality, NetworkRefresh, ScoringConfig, StrategySpec,
};
use crate::engine::error::EngineError;
use crate::engine::loaded::{load_or_degrade, load_or_degrade_with};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::resolver::MutationResolver;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};

/// An input or output step that failed and was replaced by an empty fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedPhase {
    pub action: &'static str,
    pub resource: &'static str,
    pub message: String,
}

impl DegradedPhase {
    fn reading(resource: &'static str, error: impl fmt::Display) -> Self {
        Self {
            action: "reading",
            resource,
            message: error.to_string(),
        }
    }

    fn writing(resource: &'static str, error: impl fmt::Display) -> Self {
        Self {
            action: "writing",
            resource,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for DegradedPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error while {} {} file: {}",
            self.action, self.resource, self.message
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub mutations_loaded: usize,
    pub proteins_in_network: usize,
    pub interactions_in_network: usize,
    pub unresolved: Vec<MutationId>,
    pub without_partners: Vec<MutationId>,
    pub rows_written: usize,
    pub degraded: Vec<DegradedPhase>,
}

impl RunSummary {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RunOutput {
    pub result: ClassificationResult,
    pub summary: RunSummary,
}

/// Runs the full pipeline with the local annotation table as resolver.
///
/// The scoring policy is assembled first so that a bad classifier name, a
/// missing matrix file or an unreadable interface table stops the run before
/// any mutation or network data is touched.
#[instrument(skip_all, name = "classification_workflow")]
pub fn run(
    config: &ClassificationConfig,
    reporter: &ProgressReporter,
) -> Result<RunOutput, EngineError> {
    let policy = reporter.phase("Preparing classifier", || {
        prepare_policy(&config.scoring, config.input.interface_source.as_deref())
    })?;
    info!("Using '{}' scoring.", policy.strategy().name());

    if config.mutation_locality == MutationLocality::AllowRemote {
        warn!("Remote mutation lookup is not available; resolving from the local annotation table only.");
    }
    let annotations = reporter.phase("Loading annotations", || {
        load_or_degrade::<AnnotationTable>(&config.input.annotation_source, "annotation")
    });
    let mut degraded = Vec::new();
    if let Some(e) = &annotations.error {
        degraded.push(DegradedPhase::reading("annotation", e));
    }

    let mut output = run_with(config, &annotations.data, &policy, reporter)?;
    degraded.append(&mut output.summary.degraded);
    output.summary.degraded = degraded;
    Ok(output)
}

/// Runs load, classify and write with caller-supplied resolution and scoring.
#[instrument(skip_all, name = "classification_pipeline")]
pub fn run_with(
    config: &ClassificationConfig,
    resolver: &dyn MutationResolver,
    scorer: &dyn InteractionScorer,
    reporter: &ProgressReporter,
) -> Result<RunOutput, EngineError> {
    let mut summary = RunSummary::default();

    if config.network_refresh == NetworkRefresh::Update {
        warn!(
            "Network refresh is not available; using the local snapshot at {:?}.",
            config.input.network_source
        );
    }
    let network = reporter.phase("Loading network", || {
        load_or_degrade::<InteractionNetwork>(&config.input.network_source, "ppin")
    });
    if let Some(e) = &network.error {
        summary.degraded.push(DegradedPhase::reading("ppin", e));
    }
    let network = network.data;
    summary.proteins_in_network = network.protein_count();
    summary.interactions_in_network = network.interaction_count();

    let max_mutations = config.input.max_mutations;
    let mutations = reporter.phase("Loading mutations", || {
        load_or_degrade_with(&config.input.mutation_source, "mutations", |path| {
            let mut reader = open_source(path).map_err(MutationLoadError::from)?;
            MutationSet::read_with_limit(&mut reader, max_mutations)
        })
    });
    if let Some(e) = &mutations.error {
        summary.degraded.push(DegradedPhase::reading("mutations", e));
    }
    let mutations = mutations.data;
    summary.mutations_loaded = mutations.len();
    info!(
        "Loaded {} protein(s) with {} interaction(s) and {} mutation(s).",
        summary.proteins_in_network,
        summary.interactions_in_network,
        summary.mutations_loaded
    );

    reporter.report(Progress::PhaseStart { name: "Classifying" });
    let classification = classify(
        &network,
        &mutations,
        resolver,
        scorer,
        reporter,
        config.parallel,
    );
    reporter.report(Progress::PhaseFinish);
    summary.unresolved = classification.unresolved;
    summary.without_partners = classification.without_partners;
    let result = classification.result;

    let written = reporter.phase("Writing report", || {
        DisruptionReport::write_to_path(&result, &config.output_path)
    });
    match written {
        Ok(rows) => {
            info!("Wrote {} row(s) to {:?}.", rows, config.output_path);
            summary.rows_written = rows;
        }
        Err(e) => {
            error!("Error while writing output file: {}", e);
            summary.degraded.push(DegradedPhase::writing("output", e));
        }
    }

    Ok(RunOutput { result, summary })
}

/// Builds the scoring policy named by `scoring`, loading the interface table if given.
pub fn prepare_policy(
    scoring: &ScoringConfig,
    interface_source: Option<&Path>,
) -> Result<InterfacePolicy, EngineError> {
    let strategy = match scoring.strategy {
        StrategySpec::Blosum(number) => ScoringStrategy::Substitution {
            matrix: resolve_matrix(number, scoring.matrix_dir.as_deref())?,
            threshold: scoring.substitution_threshold,
        },
        StrategySpec::Hydrophobicity => ScoringStrategy::Hydrophobicity {
            threshold: scoring.hydropathy_threshold,
        },
    };

    let mut policy = InterfacePolicy::new(strategy);
    if let Some(path) = interface_source {
        let interfaces =
            InterfaceTable::read_from_path(path).map_err(|source| EngineError::Interfaces {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            "Restricting disruption calls to {} annotated interface(s).",
            interfaces.len()
        );
        policy = policy.with_interfaces(interfaces);
    }
    Ok(policy)
}

fn matrix_candidates(number: u32, dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join(format!("blosum{}.txt", number)),
        dir.join(format!("BLOSUM{}", number)),
    ]
}

fn resolve_matrix(number: u32, matrix_dir: Option<&Path>) -> Result<SubstitutionMatrix, EngineError> {
    if let Some(matrix) = SubstitutionMatrix::builtin_blosum(number) {
        return Ok(matrix);
    }

    let searched = matrix_dir
        .map(|dir| matrix_candidates(number, dir))
        .unwrap_or_default();
    let Some(path) = searched.iter().find(|p| p.is_file()) else {
        return Err(EngineError::MatrixNotFound { number, searched });
    };

    info!("Loading substitution matrix BLOSUM{} from {:?}.", number, path);
    SubstitutionMatrix::read_from_path(path)
        .map(|matrix| matrix.with_name(format!("BLOSUM{}", number)))
        .map_err(|source| EngineError::Matrix {
            path: path.clone(),
            source,
        })
}
