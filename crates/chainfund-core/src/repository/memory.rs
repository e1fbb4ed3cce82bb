//! Process-local repository backed by a sorted map.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::{Record, Repository};
use crate::error::FundResult;

/// In-memory repository.
///
/// Never fails. Records live until the process exits.
pub struct InMemoryRepository<T: Record> {
    records: RwLock<BTreeMap<T::Id, T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Repository pre-filled with `records`; later duplicates win
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let records = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> FundResult<Vec<T>> {
        Ok(self.records.read().values().cloned().collect())
    }

    fn get(&self, id: T::Id) -> FundResult<Option<T>> {
        Ok(self.records.read().get(&id).cloned())
    }

    fn upsert(&self, record: T) -> FundResult<Option<T>> {
        let id = record.id();
        let previous = self.records.write().insert(id, record);
        tracing::debug!(kind = T::KIND, %id, replaced = previous.is_some(), "upsert");
        Ok(previous)
    }

    fn remove(&self, id: T::Id) -> FundResult<Option<T>> {
        let removed = self.records.write().remove(&id);
        tracing::debug!(kind = T::KIND, %id, found = removed.is_some(), "remove");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CommunityId, Membership, Role};

    fn membership(id: u32, contribution: u64) -> Membership {
        Membership {
            community_id: CommunityId(id),
            contribution,
            role: Role::Member,
        }
    }

    #[test]
    fn test_empty() {
        let repo: InMemoryRepository<Membership> = InMemoryRepository::new();
        assert!(repo.is_empty());
        assert!(repo.list().unwrap().is_empty());
        assert!(repo.get(CommunityId(1)).unwrap().is_none());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let repo = InMemoryRepository::with_records([
            membership(3, 30),
            membership(1, 10),
            membership(2, 20),
        ]);
        let ids: Vec<_> = repo.list().unwrap().iter().map(|m| m.community_id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_upsert_insert_then_replace() {
        let repo = InMemoryRepository::new();
        assert!(repo.upsert(membership(1, 10)).unwrap().is_none());

        let replaced = repo.upsert(membership(1, 99)).unwrap();
        assert_eq!(replaced.map(|m| m.contribution), Some(10));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(CommunityId(1)).unwrap().unwrap().contribution, 99);
    }

    #[test]
    fn test_remove() {
        let repo = InMemoryRepository::with_records([membership(1, 10), membership(2, 20)]);
        assert_eq!(repo.remove(CommunityId(1)).unwrap().map(|m| m.contribution), Some(10));
        assert!(repo.remove(CommunityId(1)).unwrap().is_none());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_with_records_later_duplicate_wins() {
        let repo = InMemoryRepository::with_records([membership(1, 10), membership(1, 20)]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(CommunityId(1)).unwrap().unwrap().contribution, 20);
    }
}
