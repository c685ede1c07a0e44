use crate::cli::{ClassifyArgs, DEFAULT_OUTPUT};
use crate::data::DataManager;
use crate::error::{CliError, Result};
use ppidisrupt::engine::config as core_config;
use ppidisrupt::engine::error::EngineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialInputConfig {
    ppin: Option<PathBuf>,
    annotations: Option<PathBuf>,
    interfaces: Option<PathBuf>,
    max_mutations: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialClassifierConfig {
    name: Option<String>,
    matrix_dir: Option<PathBuf>,
    blosum_threshold: Option<i32>,
    hydrophobicity_threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialResolutionConfig {
    update_ppin: Option<bool>,
    local_mutations: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialOutputConfig {
    path: Option<PathBuf>,
    parallel: Option<bool>,
}

/// Settings read from a TOML file; every value is optional and CLI flags win.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialClassificationConfig {
    input: Option<PartialInputConfig>,
    classifier: Option<PartialClassifierConfig>,
    resolution: Option<PartialResolutionConfig>,
    output: Option<PartialOutputConfig>,
}

impl PartialClassificationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `--config` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(
        mut self,
        args: &ClassifyArgs,
        data_manager: &DataManager,
    ) -> Result<core_config::ClassificationConfig> {
        self.apply_set_values(&args.set_values)?;

        let input = self.input.take().unwrap_or_default();
        let classifier = self.classifier.take().unwrap_or_default();
        let resolution = self.resolution.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let strategy = match args.classifier.as_ref().or(classifier.name.as_ref()) {
            Some(name) => core_config::StrategySpec::from_str(name).map_err(EngineError::from)?,
            None => core_config::StrategySpec::default(),
        };

        let network_refresh = if args.update_ppin || resolution.update_ppin.unwrap_or(false) {
            core_config::NetworkRefresh::Update
        } else {
            core_config::NetworkRefresh::Local
        };
        let mutation_locality =
            if args.local_mutations || resolution.local_mutations.unwrap_or(false) {
                core_config::MutationLocality::LocalOnly
            } else {
                core_config::MutationLocality::AllowRemote
            };

        let mut builder = core_config::ClassificationConfigBuilder::new()
            .mutation_source(args.mutations.clone())
            .network_source(
                args.ppin
                    .clone()
                    .or(input.ppin)
                    .unwrap_or_else(|| data_manager.network_path()),
            )
            .annotation_source(
                args.annotations
                    .clone()
                    .or(input.annotations)
                    .unwrap_or_else(|| data_manager.annotation_path()),
            )
            .interface_source(args.interfaces.clone().or(input.interfaces))
            .strategy(strategy)
            .matrix_dir(Some(
                args.matrix_dir
                    .clone()
                    .or(classifier.matrix_dir)
                    .unwrap_or_else(|| data_manager.matrix_dir()),
            ))
            .network_refresh(network_refresh)
            .mutation_locality(mutation_locality)
            .output_path(
                args.output
                    .clone()
                    .or(output.path)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            )
            .parallel(args.parallel || output.parallel.unwrap_or(false));

        if let Some(max) = input.max_mutations {
            builder = builder.max_mutations(max);
        }
        if let Some(threshold) = classifier.blosum_threshold {
            builder = builder.substitution_threshold(threshold);
        }
        if let Some(threshold) = classifier.hydrophobicity_threshold {
            builder = builder.hydropathy_threshold(threshold);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "input.max-mutations" => {
                    self.input.get_or_insert_with(Default::default).max_mutations =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "classifier.name" => {
                    self.classifier.get_or_insert_with(Default::default).name =
                        Some(value_str.to_string());
                }
                "classifier.blosum-threshold" => {
                    self.classifier
                        .get_or_insert_with(Default::default)
                        .blosum_threshold = Some(parse_value(key, value_str, "integer")?);
                }
                "classifier.hydrophobicity-threshold" => {
                    self.classifier
                        .get_or_insert_with(Default::default)
                        .hydrophobicity_threshold = Some(parse_value(key, value_str, "float")?);
                }
                "resolution.update-ppin" => {
                    self.resolution
                        .get_or_insert_with(Default::default)
                        .update_ppin = Some(parse_value(key, value_str, "boolean")?);
                }
                "resolution.local-mutations" => {
                    self.resolution
                        .get_or_insert_with(Default::default)
                        .local_mutations = Some(parse_value(key, value_str, "boolean")?);
                }
                "output.parallel" => {
                    self.output.get_or_insert_with(Default::default).parallel =
                        Some(parse_value(key, value_str, "boolean")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}
