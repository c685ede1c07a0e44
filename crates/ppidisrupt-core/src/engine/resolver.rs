use crate::core::io::annotations::AnnotationTable;
use crate::core::models::ids::MutationId;
use crate::core::models::mutation::Mutation;

/// Maps a dbSNP identifier to the protein it falls in and, when known, the residue change.
///
/// Returning `None` means the mutation cannot be placed on any protein; the
/// classifier then skips it without recording any calls.
pub trait MutationResolver: Send + Sync {
    fn resolve(&self, id: &MutationId) -> Option<Mutation>;
}

impl MutationResolver for AnnotationTable {
    fn resolve(&self, id: &MutationId) -> Option<Mutation> {
        self.get(id.as_str()).cloned()
    }
}

impl<F> MutationResolver for F
where
    F: Fn(&MutationId) -> Option<Mutation> + Send + Sync,
{
    fn resolve(&self, id: &MutationId) -> Option<Mutation> {
        self(id)
    }
}
