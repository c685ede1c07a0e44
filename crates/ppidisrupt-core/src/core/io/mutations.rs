use super::source::SourceError;
use super::traits::TabularSource;
use crate::core::models::ids::MutationId;
use std::collections::HashSet;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

/// Upper bound on the number of mutations accepted from one input list.
pub const MAX_MUTATIONS: usize = 1000;

#[derive(Debug, Error)]
pub enum MutationLoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("I/O error while reading mutation list: {0}")]
    Io(#[from] io::Error),
}

/// Deduplicated mutation identifiers, kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationSet {
    ids: Vec<MutationId>,
    seen: HashSet<MutationId>,
}

impl MutationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: MutationId) -> bool {
        if self.seen.contains(&id) {
            return false;
        }
        self.seen.insert(id.clone());
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MutationId> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[MutationId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Reads `rs`-prefixed identifiers until `limit` distinct ones are collected.
    ///
    /// Reading stops as soon as the limit is reached, so the first qualifying
    /// lines in file order win and trailing input is never touched.
    pub fn read_with_limit(
        reader: &mut impl BufRead,
        limit: usize,
    ) -> Result<Self, MutationLoadError> {
        let mut set = MutationSet::new();
        let mut rejected = 0usize;
        let mut line = String::new();

        while set.len() < limit {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            match MutationId::from_line(&line) {
                Some(id) => {
                    set.insert(id);
                }
                None => rejected += 1,
            }
        }

        debug!(
            accepted = set.len(),
            rejected,
            limit,
            "Parsed mutation identifier list."
        );
        Ok(set)
    }
}

impl FromIterator<MutationId> for MutationSet {
    fn from_iter<I: IntoIterator<Item = MutationId>>(iter: I) -> Self {
        let mut set = MutationSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MutationSet {
    type Item = &'a MutationId;
    type IntoIter = std::slice::Iter<'a, MutationId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl TabularSource for MutationSet {
    type Error = MutationLoadError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        Self::read_with_limit(reader, MAX_MUTATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn load(content: &str) -> MutationSet {
        MutationSet::read_from(&mut Cursor::new(content)).unwrap()
    }

    #[test]
    fn only_prefixed_lines_are_kept_and_trimmed() {
        let set = load("rs1\nnotanrsid123\n  rs123  \n\nchr1:12345\n");
        let ids: Vec<_> = set.iter().map(MutationId::as_str).collect();
        assert_eq!(ids, vec!["rs1", "rs123"]);
    }

    #[test]
    fn duplicates_collapse_to_one_entry() {
        let set = load("rs7\nrs7\n rs7\nrs8\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("rs7"));
        assert!(set.contains("rs8"));
    }

    #[test]
    fn cap_keeps_first_thousand_in_file_order() {
        let content: String = (0..1500).map(|i| format!("rs{}\n", i)).collect();
        let set = load(&content);
        assert_eq!(set.len(), MAX_MUTATIONS);
        assert_eq!(set.as_slice()[0].as_str(), "rs0");
        assert_eq!(set.as_slice()[999].as_str(), "rs999");
        assert!(!set.contains("rs1000"));
    }

    #[test]
    fn duplicates_do_not_count_towards_cap() {
        let mut content = String::from("rs0\nrs0\nrs0\n");
        content.extend((1..5).map(|i| format!("rs{}\n", i)));
        let set = MutationSet::read_with_limit(&mut Cursor::new(content), 3).unwrap();
        let ids: Vec<_> = set.iter().map(MutationId::as_str).collect();
        assert_eq!(ids, vec!["rs0", "rs1", "rs2"]);
    }

    #[test]
    fn loading_from_missing_path_fails_with_source_error() {
        let dir = tempdir().unwrap();
        let result = MutationSet::read_from_path(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(MutationLoadError::Source(_))));
    }

    #[test]
    fn loading_from_plain_path_succeeds() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mutations.txt");
        fs::write(&path, "rs10\nrs11\n").unwrap();
        let set = MutationSet::read_from_path(&path).unwrap();
        assert_eq!(set.len(), 2);
    }
}
