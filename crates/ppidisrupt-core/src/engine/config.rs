use crate::core::io::mutations::MAX_MUTATIONS;
use crate::core::scoring::strategy::{
    DEFAULT_HYDROPATHY_THRESHOLD, DEFAULT_SUBSTITUTION_THRESHOLD,
};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StrategyParseError {
    #[error("Unknown classifier '{0}'. Expected 'blosum<N>' (e.g. 'blosum62') or 'hydrophobicity'.")]
    Unknown(String),
    #[error("Invalid BLOSUM parameter in '{name}': {reason}")]
    InvalidBlosumParameter { name: String, reason: &'static str },
}

const BLOSUM_PREFIX: &str = "blosum";

/// Which scoring variant to use, as selected by name on the command line or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategySpec {
    Blosum(u32),
    Hydrophobicity,
}

impl Default for StrategySpec {
    fn default() -> Self {
        StrategySpec::Blosum(62)
    }
}

impl FromStr for StrategySpec {
    type Err = StrategyParseError;

    /// Accepts `blosum<N>`, optionally followed by one non-alphanumeric marker
    /// (`blosum62%`), and `hydrophobicity` / `hydropathy`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        if name == "hydrophobicity" || name == "hydropathy" {
            return Ok(StrategySpec::Hydrophobicity);
        }

        let Some(parameter) = name.strip_prefix(BLOSUM_PREFIX) else {
            return Err(StrategyParseError::Unknown(s.to_string()));
        };

        let digits = match parameter.chars().last() {
            Some(c) if !c.is_ascii_alphanumeric() => &parameter[..parameter.len() - c.len_utf8()],
            _ => parameter,
        };

        let invalid = |reason| StrategyParseError::InvalidBlosumParameter {
            name: s.to_string(),
            reason,
        };
        if digits.is_empty() {
            return Err(invalid("missing matrix number"));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("matrix number must be a positive integer"));
        }
        match digits.parse::<u32>() {
            Ok(0) => Err(invalid("matrix number must be greater than zero")),
            Ok(number) => Ok(StrategySpec::Blosum(number)),
            Err(_) => Err(invalid("matrix number is out of range")),
        }
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategySpec::Blosum(n) => write!(f, "{}{}", BLOSUM_PREFIX, n),
            StrategySpec::Hydrophobicity => write!(f, "hydrophobicity"),
        }
    }
}

/// Whether to use the local network snapshot or ask for a refreshed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkRefresh {
    #[default]
    Local,
    Update,
}

/// Whether mutation resolution may consult external services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationLocality {
    LocalOnly,
    #[default]
    AllowRemote,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub mutation_source: PathBuf,
    pub network_source: PathBuf,
    pub annotation_source: PathBuf,
    pub interface_source: Option<PathBuf>,
    pub max_mutations: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub strategy: StrategySpec,
    pub matrix_dir: Option<PathBuf>,
    pub substitution_threshold: i32,
    pub hydropathy_threshold: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationConfig {
    pub input: InputConfig,
    pub scoring: ScoringConfig,
    pub network_refresh: NetworkRefresh,
    pub mutation_locality: MutationLocality,
    pub output_path: PathBuf,
    pub parallel: bool,
}

#[derive(Default)]
pub struct ClassificationConfigBuilder {
    mutation_source: Option<PathBuf>,
    network_source: Option<PathBuf>,
    annotation_source: Option<PathBuf>,
    interface_source: Option<PathBuf>,
    max_mutations: Option<usize>,
    strategy: Option<StrategySpec>,
    matrix_dir: Option<PathBuf>,
    substitution_threshold: Option<i32>,
    hydropathy_threshold: Option<f64>,
    network_refresh: Option<NetworkRefresh>,
    mutation_locality: Option<MutationLocality>,
    output_path: Option<PathBuf>,
    parallel: Option<bool>,
}

impl ClassificationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mutation_source(mut self, path: PathBuf) -> Self {
        self.mutation_source = Some(path);
        self
    }
    pub fn network_source(mut self, path: PathBuf) -> Self {
        self.network_source = Some(path);
        self
    }
    pub fn annotation_source(mut self, path: PathBuf) -> Self {
        self.annotation_source = Some(path);
        self
    }
    pub fn interface_source(mut self, path: Option<PathBuf>) -> Self {
        self.interface_source = path;
        self
    }
    pub fn max_mutations(mut self, max: usize) -> Self {
        self.max_mutations = Some(max);
        self
    }
    pub fn strategy(mut self, strategy: StrategySpec) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn matrix_dir(mut self, path: Option<PathBuf>) -> Self {
        self.matrix_dir = path;
        self
    }
    pub fn substitution_threshold(mut self, threshold: i32) -> Self {
        self.substitution_threshold = Some(threshold);
        self
    }
    pub fn hydropathy_threshold(mut self, threshold: f64) -> Self {
        self.hydropathy_threshold = Some(threshold);
        self
    }
    pub fn network_refresh(mut self, mode: NetworkRefresh) -> Self {
        self.network_refresh = Some(mode);
        self
    }
    pub fn mutation_locality(mut self, mode: MutationLocality) -> Self {
        self.mutation_locality = Some(mode);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn build(self) -> Result<ClassificationConfig, ConfigError> {
        let max_mutations = self.max_mutations.unwrap_or(MAX_MUTATIONS);
        if max_mutations == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "max_mutations",
                reason: "must be at least 1".to_string(),
            });
        }

        let hydropathy_threshold = self
            .hydropathy_threshold
            .unwrap_or(DEFAULT_HYDROPATHY_THRESHOLD);
        if !hydropathy_threshold.is_finite() || hydropathy_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                parameter: "hydropathy_threshold",
                reason: format!("must be a non-negative number, got {}", hydropathy_threshold),
            });
        }

        let input = InputConfig {
            mutation_source: self
                .mutation_source
                .ok_or(ConfigError::MissingParameter("mutation_source"))?,
            network_source: self
                .network_source
                .ok_or(ConfigError::MissingParameter("network_source"))?,
            annotation_source: self
                .annotation_source
                .ok_or(ConfigError::MissingParameter("annotation_source"))?,
            interface_source: self.interface_source,
            max_mutations,
        };
        let scoring = ScoringConfig {
            strategy: self.strategy.unwrap_or_default(),
            matrix_dir: self.matrix_dir,
            substitution_threshold: self
                .substitution_threshold
                .unwrap_or(DEFAULT_SUBSTITUTION_THRESHOLD),
            hydropathy_threshold,
        };
        Ok(ClassificationConfig {
            input,
            scoring,
            network_refresh: self.network_refresh.unwrap_or_default(),
            mutation_locality: self.mutation_locality.unwrap_or_default(),
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            parallel: self.parallel.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_builder() -> ClassificationConfigBuilder {
        ClassificationConfigBuilder::new()
            .mutation_source(PathBuf::from("mutations.txt"))
            .network_source(PathBuf::from("ppin.txt.gz"))
            .annotation_source(PathBuf::from("annotations.tsv"))
            .output_path(PathBuf::from("deletions.txt"))
    }

    #[test]
    fn parses_blosum_family_members() {
        assert_eq!("blosum62".parse(), Ok(StrategySpec::Blosum(62)));
        assert_eq!("BLOSUM80".parse(), Ok(StrategySpec::Blosum(80)));
        assert_eq!(" blosum45 ".parse(), Ok(StrategySpec::Blosum(45)));
    }

    #[test]
    fn accepts_one_trailing_marker_after_matrix_number() {
        assert_eq!("blosum62%".parse(), Ok(StrategySpec::Blosum(62)));
        assert_eq!("blosum90)".parse(), Ok(StrategySpec::Blosum(90)));
    }

    #[test]
    fn parses_hydrophobicity_aliases() {
        assert_eq!("hydrophobicity".parse(), Ok(StrategySpec::Hydrophobicity));
        assert_eq!("Hydropathy".parse(), Ok(StrategySpec::Hydrophobicity));
    }

    #[test]
    fn rejects_invalid_strategy_names() {
        assert!(matches!(
            "random".parse::<StrategySpec>(),
            Err(StrategyParseError::Unknown(_))
        ));
        for bad in ["blosum", "blosumXY", "blosum0", "blosum6x2", "blosum62%%"] {
            assert!(
                matches!(
                    bad.parse::<StrategySpec>(),
                    Err(StrategyParseError::InvalidBlosumParameter { .. })
                ),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for spec in [StrategySpec::Blosum(50), StrategySpec::Hydrophobicity] {
            assert_eq!(spec.to_string().parse(), Ok(spec));
        }
    }

    #[test]
    fn builder_applies_defaults() {
        let config = minimal_builder().build().unwrap();
        assert_eq!(config.scoring.strategy, StrategySpec::Blosum(62));
        assert_eq!(config.scoring.substitution_threshold, 0);
        assert_eq!(config.scoring.hydropathy_threshold, 3.0);
        assert_eq!(config.input.max_mutations, 1000);
        assert_eq!(config.network_refresh, NetworkRefresh::Local);
        assert_eq!(config.mutation_locality, MutationLocality::AllowRemote);
        assert!(config.input.interface_source.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn builder_reports_missing_mutation_source() {
        let result = ClassificationConfigBuilder::new()
            .network_source(PathBuf::from("ppin.txt"))
            .annotation_source(PathBuf::from("a.tsv"))
            .output_path(PathBuf::from("out.txt"))
            .build();
        assert_eq!(
            result,
            Err(ConfigError::MissingParameter("mutation_source"))
        );
    }

    #[test]
    fn builder_rejects_negative_hydropathy_threshold() {
        let result = minimal_builder().hydropathy_threshold(-1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "hydropathy_threshold",
                ..
            })
        ));
    }

    #[test]
    fn builder_rejects_zero_mutation_cap() {
        let result = minimal_builder().max_mutations(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
