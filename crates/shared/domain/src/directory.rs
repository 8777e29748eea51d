//! Fixed set of person ids that are considered to exist.
//!
//! Read-only for the life of the process. There is no storage behind it; lookups only
//! distinguish "exists" from "not found".

use std::collections::BTreeSet;

use crate::constants::{DEFAULT_PERSON_IDS, PERSON_NOT_FOUND_MESSAGE};
use crate::error::{DomainError, DomainResult};

/// Membership oracle for person ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDirectory {
    ids: BTreeSet<i64>,
}

impl PersonDirectory {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Check if a person id is known
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Return the id if known, otherwise a not found error
    pub fn require(&self, id: i64) -> DomainResult<i64> {
        if self.contains(id) {
            Ok(id)
        } else {
            Err(DomainError::not_found(PERSON_NOT_FOUND_MESSAGE))
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for PersonDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_PERSON_IDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directory_holds_one_through_five() {
        let directory = PersonDirectory::default();

        assert_eq!(directory.ids().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        for id in 1..=5 {
            assert_eq!(directory.require(id), Ok(id));
        }
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let directory = PersonDirectory::default();

        for id in [0, 6, 99, -1] {
            assert_eq!(
                directory.require(id),
                Err(DomainError::NotFound("person not found".to_string()))
            );
        }
    }

    #[test]
    fn custom_directory_deduplicates() {
        let directory = PersonDirectory::new([7, 7, 8]);

        assert_eq!(directory.len(), 2);
        assert!(directory.contains(8));
        assert!(!directory.contains(1));
    }
}
