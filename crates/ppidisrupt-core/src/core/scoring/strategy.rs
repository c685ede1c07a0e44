use super::hydrophobicity::hydropathy_shift;
use super::matrix::SubstitutionMatrix;
use crate::core::models::mutation::Substitution;

/// Matrix scores strictly below this value count as disruptive.
pub const DEFAULT_SUBSTITUTION_THRESHOLD: i32 = 0;
/// Absolute Kyte-Doolittle changes at or above this value count as disruptive.
pub const DEFAULT_HYDROPATHY_THRESHOLD: f64 = 3.0;

/// Decides whether a single residue substitution is severe enough to break an interface.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringStrategy {
    Substitution {
        matrix: SubstitutionMatrix,
        threshold: i32,
    },
    Hydrophobicity {
        threshold: f64,
    },
}

impl ScoringStrategy {
    pub fn substitution(matrix: SubstitutionMatrix) -> Self {
        Self::Substitution {
            matrix,
            threshold: DEFAULT_SUBSTITUTION_THRESHOLD,
        }
    }

    pub fn hydrophobicity() -> Self {
        Self::Hydrophobicity {
            threshold: DEFAULT_HYDROPATHY_THRESHOLD,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Substitution { matrix, .. } => matrix.name().to_string(),
            Self::Hydrophobicity { .. } => "hydrophobicity".to_string(),
        }
    }

    /// Synonymous changes are never disruptive, whatever the threshold.
    pub fn is_disruptive(&self, substitution: &Substitution) -> bool {
        if substitution.is_synonymous() {
            return false;
        }
        match self {
            Self::Substitution { matrix, threshold } => {
                matrix.score(substitution.wild_type, substitution.mutant) < *threshold
            }
            Self::Hydrophobicity { threshold } => {
                hydropathy_shift(substitution.wild_type, substitution.mutant).abs() >= *threshold
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::amino_acid::AminoAcid::*;

    #[test]
    fn blosum_strategy_flags_negative_scores() {
        let strategy = ScoringStrategy::substitution(SubstitutionMatrix::blosum62());
        // G->I scores -4, I->V scores 3, R->H scores 0.
        assert!(strategy.is_disruptive(&Substitution::new(1, Glycine, Isoleucine)));
        assert!(!strategy.is_disruptive(&Substitution::new(1, Isoleucine, Valine)));
        assert!(!strategy.is_disruptive(&Substitution::new(1, Arginine, Histidine)));
    }

    #[test]
    fn threshold_is_configurable() {
        let strategy = ScoringStrategy::Substitution {
            matrix: SubstitutionMatrix::blosum62(),
            threshold: 1,
        };
        assert!(strategy.is_disruptive(&Substitution::new(1, Arginine, Histidine)));
    }

    #[test]
    fn hydrophobicity_strategy_flags_large_shifts() {
        let strategy = ScoringStrategy::hydrophobicity();
        assert!(strategy.is_disruptive(&Substitution::new(1, Leucine, Lysine)));
        assert!(!strategy.is_disruptive(&Substitution::new(1, Leucine, Isoleucine)));
    }

    #[test]
    fn synonymous_changes_never_disrupt() {
        let strict = ScoringStrategy::Substitution {
            matrix: SubstitutionMatrix::blosum62(),
            threshold: 100,
        };
        assert!(!strict.is_disruptive(&Substitution::new(5, Alanine, Alanine)));
        let strict = ScoringStrategy::Hydrophobicity { threshold: 0.0 };
        assert!(!strict.is_disruptive(&Substitution::new(5, Alanine, Alanine)));
    }

    #[test]
    fn names_identify_the_variant() {
        assert_eq!(
            ScoringStrategy::substitution(SubstitutionMatrix::blosum62()).name(),
            "BLOSUM62"
        );
        assert_eq!(ScoringStrategy::hydrophobicity().name(), "hydrophobicity");
    }
}
