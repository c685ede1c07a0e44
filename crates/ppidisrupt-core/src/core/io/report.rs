use crate::core::models::classification::ClassificationResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not create report file '{path}': {source}", path = path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while writing report: {0}")]
    Io(#[from] io::Error),
}

/// One line of the disruption report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub mutation_id: String,
    pub protein_id: String,
    pub interactor_id: String,
    pub disrupted: bool,
}

impl ReportRow {
    /// Parses a report line back into its four columns.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.trim_end_matches(['\r', '\n']).split('\t');
        let (Some(mutation_id), Some(protein_id), Some(interactor_id), Some(flag), None) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return None;
        };
        let disrupted = match flag {
            "1" => true,
            "0" => false,
            _ => return None,
        };
        Some(Self {
            mutation_id: mutation_id.to_string(),
            protein_id: protein_id.to_string(),
            interactor_id: interactor_id.to_string(),
            disrupted,
        })
    }
}

/// Tab-separated report: `mutation_id  protein_id  interactor_id  0|1`, no header.
pub struct DisruptionReport;

impl DisruptionReport {
    /// Writes one row per classified interactor and returns the number of rows.
    pub fn write_to(
        result: &ClassificationResult,
        writer: &mut impl Write,
    ) -> Result<usize, ReportError> {
        let mut rows = 0;
        for (mutation, call) in result.rows() {
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                mutation.id,
                mutation.protein,
                call.interactor,
                if call.disrupted { 1 } else { 0 }
            )?;
            rows += 1;
        }
        writer.flush()?;
        Ok(rows)
    }

    /// Creates (or truncates) `path` and writes the report into it.
    pub fn write_to_path<P: AsRef<Path>>(
        result: &ClassificationResult,
        path: P,
    ) -> Result<usize, ReportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ReportError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        Self::write_to(result, &mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::classification::MutationCalls;
    use crate::core::models::ids::{MutationId, ProteinId};
    use crate::core::models::mutation::Mutation;
    use std::fs;
    use tempfile::tempdir;

    fn single_call(disrupted: bool) -> ClassificationResult {
        let mut calls = MutationCalls::new(Mutation::new(
            MutationId::new("rs1"),
            ProteinId::new("P2"),
        ));
        calls.record(ProteinId::new("P1"), disrupted);
        std::iter::once(calls).collect()
    }

    #[test]
    fn written_row_parses_back_to_the_same_columns() {
        let mut buf = Vec::new();
        let rows = DisruptionReport::write_to(&single_call(true), &mut buf).unwrap();
        assert_eq!(rows, 1);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "rs1\tP2\tP1\t1\n");
        let row = ReportRow::parse(text.lines().next().unwrap()).unwrap();
        assert_eq!(
            row,
            ReportRow {
                mutation_id: "rs1".into(),
                protein_id: "P2".into(),
                interactor_id: "P1".into(),
                disrupted: true,
            }
        );
    }

    #[test]
    fn non_disrupted_calls_are_written_as_zero() {
        let mut buf = Vec::new();
        DisruptionReport::write_to(&single_call(false), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "rs1\tP2\tP1\t0\n");
    }

    #[test]
    fn empty_result_writes_empty_file() {
        let mut buf = Vec::new();
        let rows = DisruptionReport::write_to(&ClassificationResult::new(), &mut buf).unwrap();
        assert_eq!(rows, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deletions.txt");
        fs::write(&path, "stale content that should disappear\n").unwrap();

        DisruptionReport::write_to_path(&single_call(true), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "rs1\tP2\tP1\t1\n");
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");
        let result = DisruptionReport::write_to_path(&single_call(true), &path);
        assert!(matches!(result, Err(ReportError::Create { .. })));
    }

    #[test]
    fn parse_rejects_malformed_rows() {
        assert!(ReportRow::parse("rs1\tP2\tP1").is_none());
        assert!(ReportRow::parse("rs1\tP2\tP1\t2").is_none());
        assert!(ReportRow::parse("rs1\tP2\tP1\t1\textra").is_none());
    }
}
