use crate::cli::ClassifyArgs;
use crate::config::PartialClassificationConfig;
use crate::data::DataManager;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ppidisrupt::engine::progress::ProgressReporter;
use ppidisrupt::workflows;
use tracing::{info, warn};

pub fn run(args: ClassifyArgs) -> Result<()> {
    info!("Initializing data manager...");
    let data_manager = DataManager::new()?;

    let partial_config = PartialClassificationConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args, &data_manager)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Classifying mutations from {} with '{}'...",
        final_config.input.mutation_source.display(),
        final_config.scoring.strategy
    );
    info!("Invoking the core classification workflow...");

    let output = workflows::classify::run(&final_config, &reporter)?;
    let summary = &output.summary;

    for degraded in &summary.degraded {
        println!("{}", degraded);
    }
    if !summary.unresolved.is_empty() {
        warn!(
            "{} mutation(s) could not be resolved to a protein.",
            summary.unresolved.len()
        );
    }
    if !summary.without_partners.is_empty() {
        info!(
            "{} mutation(s) fall in proteins without recorded interactions.",
            summary.without_partners.len()
        );
    }

    println!(
        "✓ {} of {} mutation(s) classified; {} of {} interaction(s) predicted disrupted.",
        output.result.mutation_count(),
        summary.mutations_loaded,
        output.result.disrupted_count(),
        output.result.call_count()
    );
    if !summary.degraded.iter().any(|d| d.action == "writing") {
        println!(
            "  Results written to: {}",
            final_config.output_path.display()
        );
    }

    Ok(())
}
