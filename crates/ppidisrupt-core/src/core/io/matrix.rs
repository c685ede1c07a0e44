use super::source::SourceError;
use super::traits::TabularSource;
use crate::core::models::amino_acid::AminoAcid;
use crate::core::scoring::matrix::{ScoreTable, SubstitutionMatrix};
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixLoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("I/O error while reading substitution matrix: {0}")]
    Io(#[from] io::Error),
    #[error("Substitution matrix has no column header")]
    MissingHeader,
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Substitution matrix is missing the score for {from}->{to}")]
    Incomplete { from: AminoAcid, to: AminoAcid },
}

/// Reads a matrix in the NCBI text layout: `#` comments, one header line of
/// residue letters, then one row per residue. Ambiguity codes (`B`, `Z`, `X`,
/// `*`) are accepted and ignored.
impl TabularSource for SubstitutionMatrix {
    type Error = MatrixLoadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut columns: Option<Vec<Option<AminoAcid>>> = None;
        let mut cells: [[Option<i32>; 20]; 20] = [[None; 20]; 20];

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if columns.is_none() {
                columns = Some(trimmed.split_whitespace().map(parse_residue).collect());
                continue;
            }
            let header = columns.as_deref().unwrap_or_default();

            let mut fields = trimmed.split_whitespace();
            let row_label = fields.next().unwrap_or_default();
            let Some(row) = parse_residue(row_label) else {
                continue;
            };

            let values: Vec<&str> = fields.collect();
            if values.len() != header.len() {
                return Err(MatrixLoadError::Parse {
                    line: line_num,
                    message: format!(
                        "expected {} scores for row '{}', found {}",
                        header.len(),
                        row_label,
                        values.len()
                    ),
                });
            }

            for (column, raw) in header.iter().zip(values) {
                let Some(column) = column else {
                    continue;
                };
                let score = raw.parse::<i32>().map_err(|_| MatrixLoadError::Parse {
                    line: line_num,
                    message: format!("invalid score '{}'", raw),
                })?;
                cells[row.index()][column.index()] = Some(score);
            }
        }

        if columns.is_none() {
            return Err(MatrixLoadError::MissingHeader);
        }

        let mut scores: ScoreTable = [[0; 20]; 20];
        for from in AminoAcid::ALL {
            for to in AminoAcid::ALL {
                scores[from.index()][to.index()] = cells[from.index()][to.index()]
                    .ok_or(MatrixLoadError::Incomplete { from, to })?;
            }
        }

        Ok(SubstitutionMatrix::new("custom", scores))
    }
}

fn parse_residue(label: &str) -> Option<AminoAcid> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => AminoAcid::from_one_letter(c),
        _ => None,
    }
}
