use crate::core::models::amino_acid::AminoAcid;

const ALPHABET_SIZE: usize = AminoAcid::ALL.len();

pub type ScoreTable = [[i32; ALPHABET_SIZE]; ALPHABET_SIZE];

// Rows and columns follow `AminoAcid::ALL` (ARNDCQEGHILKMFPSTWYV).
#[rustfmt::skip]
const BLOSUM62: ScoreTable = [
    [ 4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0],
    [-1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3],
    [-2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3],
    [-2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3],
    [ 0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1],
    [-1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2],
    [-1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2],
    [ 0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3],
    [-2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3],
    [-1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3],
    [-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1],
    [-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2],
    [-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1],
    [-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1],
    [-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2],
    [ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2],
    [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0],
    [-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3],
    [-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1],
    [ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4],
];

/// Number of the BLOSUM family member compiled into the library.
pub const BUILTIN_BLOSUM: u32 = 62;

/// A symmetric amino-acid substitution scoring table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMatrix {
    name: String,
    scores: ScoreTable,
}

impl SubstitutionMatrix {
    pub fn new(name: impl Into<String>, scores: ScoreTable) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    pub fn blosum62() -> Self {
        Self::new("BLOSUM62", BLOSUM62)
    }

    /// Returns the compiled-in member of the BLOSUM family, if there is one.
    pub fn builtin_blosum(number: u32) -> Option<Self> {
        (number == BUILTIN_BLOSUM).then(Self::blosum62)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self, from: AminoAcid, to: AminoAcid) -> i32 {
        self.scores[from.index()][to.index()]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..ALPHABET_SIZE)
            .all(|i| (i + 1..ALPHABET_SIZE).all(|j| self.scores[i][j] == self.scores[j][i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AminoAcid::*;

    #[test]
    fn blosum62_spot_values_match_published_table() {
        let m = SubstitutionMatrix::blosum62();
        assert_eq!(m.score(Tryptophan, Tryptophan), 11);
        assert_eq!(m.score(Cysteine, Cysteine), 9);
        assert_eq!(m.score(Alanine, Arginine), -1);
        assert_eq!(m.score(Isoleucine, Valine), 3);
        assert_eq!(m.score(Glycine, Isoleucine), -4);
        assert_eq!(m.score(Arginine, Histidine), 0);
    }

    #[test]
    fn blosum62_is_symmetric() {
        assert!(SubstitutionMatrix::blosum62().is_symmetric());
    }

    #[test]
    fn only_blosum62_is_builtin() {
        assert!(SubstitutionMatrix::builtin_blosum(62).is_some());
        assert!(SubstitutionMatrix::builtin_blosum(80).is_none());
    }

    #[test]
    fn identity_scores_are_positive() {
        let m = SubstitutionMatrix::blosum62();
        for aa in AminoAcid::ALL {
            assert!(m.score(aa, aa) > 0, "{} should score positively against itself", aa);
        }
    }
}
