use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,       // A
    Arginine,      // R
    Asparagine,    // N
    AsparticAcid,  // D
    Cysteine,      // C
    Glutamine,     // Q
    GlutamicAcid,  // E
    Glycine,       // G
    Histidine,     // H
    Isoleucine,    // I
    Leucine,       // L
    Lysine,        // K
    Methionine,    // M
    Phenylalanine, // F
    Proline,       // P
    Serine,        // S
    Threonine,     // T
    Tryptophan,    // W
    Tyrosine,      // Y
    Valine,        // V
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized amino acid code: '{0}'")]
pub struct AminoAcidParseError(pub String);

static THREE_LETTER_CODES: Map<&'static str, AminoAcid> = phf_map! {
    "ALA" => AminoAcid::Alanine,
    "ARG" => AminoAcid::Arginine,
    "ASN" => AminoAcid::Asparagine,
    "ASP" => AminoAcid::AsparticAcid,
    "CYS" => AminoAcid::Cysteine,
    "GLN" => AminoAcid::Glutamine,
    "GLU" => AminoAcid::GlutamicAcid,
    "GLY" => AminoAcid::Glycine,
    "HIS" => AminoAcid::Histidine,
    "ILE" => AminoAcid::Isoleucine,
    "LEU" => AminoAcid::Leucine,
    "LYS" => AminoAcid::Lysine,
    "MET" => AminoAcid::Methionine,
    "PHE" => AminoAcid::Phenylalanine,
    "PRO" => AminoAcid::Proline,
    "SER" => AminoAcid::Serine,
    "THR" => AminoAcid::Threonine,
    "TRP" => AminoAcid::Tryptophan,
    "TYR" => AminoAcid::Tyrosine,
    "VAL" => AminoAcid::Valine,
};

impl AminoAcid {
    /// Canonical order used by NCBI substitution matrix files.
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Arginine,
        AminoAcid::Asparagine,
        AminoAcid::AsparticAcid,
        AminoAcid::Cysteine,
        AminoAcid::Glutamine,
        AminoAcid::GlutamicAcid,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Leucine,
        AminoAcid::Lysine,
        AminoAcid::Methionine,
        AminoAcid::Phenylalanine,
        AminoAcid::Proline,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
        AminoAcid::Valine,
    ];

    /// Position of this residue in [`AminoAcid::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn one_letter(self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Arginine => 'R',
            AminoAcid::Asparagine => 'N',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::Cysteine => 'C',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Lysine => 'K',
            AminoAcid::Methionine => 'M',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
        }
    }

    pub fn from_one_letter(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|aa| aa.one_letter() == upper)
    }
}

impl FromStr for AminoAcid {
    type Err = AminoAcidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_one_letter(c).ok_or_else(|| AminoAcidParseError(s.to_string()))
            }
            _ => THREE_LETTER_CODES
                .get(code.to_ascii_uppercase().as_str())
                .copied()
                .ok_or_else(|| AminoAcidParseError(s.to_string())),
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}
