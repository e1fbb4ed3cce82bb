//! Placeholder for a networked backend.

use std::marker::PhantomData;

use super::{Record, Repository};
use crate::error::{FundError, FundResult};

/// Repository that would talk to a remote API.
///
/// No backend exists yet, so every call fails with
/// [`FundError::BackendUnavailable`].
pub struct RemoteRepository<T> {
    endpoint: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RemoteRepository<T> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            _record: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn unavailable(&self, op: &str) -> FundError {
        tracing::warn!(kind = T::KIND, endpoint = %self.endpoint, op, "remote backend not implemented");
        FundError::BackendUnavailable(format!("{} {} via {}", op, T::KIND, self.endpoint))
    }
}

impl<T: Record> Repository<T> for RemoteRepository<T> {
    fn list(&self) -> FundResult<Vec<T>> {
        Err(self.unavailable("list"))
    }

    fn get(&self, _id: T::Id) -> FundResult<Option<T>> {
        Err(self.unavailable("get"))
    }

    fn upsert(&self, _record: T) -> FundResult<Option<T>> {
        Err(self.unavailable("upsert"))
    }

    fn remove(&self, _id: T::Id) -> FundResult<Option<T>> {
        Err(self.unavailable("remove"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CommunityId, Membership};

    #[test]
    fn test_every_call_is_unavailable() {
        let repo: RemoteRepository<Membership> = RemoteRepository::new("https://api.test");
        assert_eq!(repo.endpoint(), "https://api.test");

        let err = repo.get(CommunityId(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Backend unavailable: get membership via https://api.test"
        );
        assert!(repo.list().is_err());
        assert!(repo.upsert(Membership::joined(CommunityId(1))).is_err());
        assert!(repo.remove(CommunityId(1)).is_err());
    }
}
