use crate::core::models::amino_acid::AminoAcid;
use phf::{Map, phf_map};

// Kyte & Doolittle (1982) hydropathy index.
static KYTE_DOOLITTLE: Map<char, f64> = phf_map! {
    'I' => 4.5,
    'V' => 4.2,
    'L' => 3.8,
    'F' => 2.8,
    'C' => 2.5,
    'M' => 1.9,
    'A' => 1.8,
    'G' => -0.4,
    'T' => -0.7,
    'S' => -0.8,
    'W' => -0.9,
    'Y' => -1.3,
    'P' => -1.6,
    'H' => -3.2,
    'E' => -3.5,
    'Q' => -3.5,
    'D' => -3.5,
    'N' => -3.5,
    'K' => -3.9,
    'R' => -4.5,
};

pub fn hydropathy(aa: AminoAcid) -> f64 {
    KYTE_DOOLITTLE
        .get(&aa.one_letter())
        .copied()
        .unwrap_or_default()
}

/// Signed hydropathy change when `from` is replaced by `to`.
pub fn hydropathy_shift(from: AminoAcid, to: AminoAcid) -> f64 {
    hydropathy(to) - hydropathy(from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_standard_residue_has_a_value() {
        for aa in AminoAcid::ALL {
            assert!(KYTE_DOOLITTLE.contains_key(&aa.one_letter()), "{} missing", aa);
        }
    }

    #[test]
    fn extremes_of_the_scale() {
        assert_eq!(hydropathy(AminoAcid::Isoleucine), 4.5);
        assert_eq!(hydropathy(AminoAcid::Arginine), -4.5);
    }

    #[test]
    fn shift_is_antisymmetric() {
        let forward = hydropathy_shift(AminoAcid::Leucine, AminoAcid::Lysine);
        let backward = hydropathy_shift(AminoAcid::Lysine, AminoAcid::Leucine);
        assert!((forward + backward).abs() < 1e-12);
        assert!((forward - (-7.7)).abs() < 1e-9);
    }
}
