use std::collections::{hash_set, HashSet};

use crate::identifier::Identifier;

/// Read-only view over the identifiers of every synced attachment type
#[derive(Clone, Copy, Debug)]
pub struct SyncableIds<'r> {
    inner: &'r HashSet<Identifier>,
}

impl<'r> SyncableIds<'r> {
    pub(crate) fn new(inner: &'r HashSet<Identifier>) -> Self {
        Self { inner }
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.inner.contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'r, Identifier> {
        self.inner.iter()
    }

    /// Identifiers in ascending order, for deterministic iteration
    pub fn sorted(&self) -> Vec<&'r Identifier> {
        let mut output: Vec<&Identifier> = self.inner.iter().collect();
        output.sort();
        output
    }
}

impl<'r> IntoIterator for SyncableIds<'r> {
    type Item = &'r Identifier;
    type IntoIter = hash_set::Iter<'r, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl PartialEq<HashSet<Identifier>> for SyncableIds<'_> {
    fn eq(&self, other: &HashSet<Identifier>) -> bool {
        self.inner == other
    }
}
