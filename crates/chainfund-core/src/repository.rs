//! Data access for campaigns, communities, memberships and profiles.
//!
//! Pages never own authoritative data: they read through a [`Repository`] on
//! mount and write back through it when an action changes a record. The app
//! runs on [`InMemoryRepository`] seeded with mock data; [`RemoteRepository`]
//! marks where a real backend would plug in.

use std::fmt::{Debug, Display};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::FundResult;
use crate::seed;
use crate::types::{
    Campaign, CampaignId, Community, CommunityId, Membership, Session, UserId, UserProfile,
};

// Submodules
mod memory;
mod remote;

pub use memory::InMemoryRepository;
pub use remote::RemoteRepository;

/// A value with a stable identity
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Copy + Ord + Display + Debug + Send + Sync + 'static;

    /// Record kind used in logs and error messages
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
}

/// Keyed collection of records.
///
/// `list` returns records ordered by id. `upsert` inserts or replaces by id
/// and hands back the record it replaced; `remove` hands back the record it
/// dropped.
pub trait Repository<T: Record>: Send + Sync {
    fn list(&self) -> FundResult<Vec<T>>;

    fn get(&self, id: T::Id) -> FundResult<Option<T>>;

    fn upsert(&self, record: T) -> FundResult<Option<T>>;

    fn remove(&self, id: T::Id) -> FundResult<Option<T>>;
}

impl Record for Campaign {
    type Id = CampaignId;
    const KIND: &'static str = "campaign";

    fn id(&self) -> CampaignId {
        self.id
    }
}

impl Record for Community {
    type Id = CommunityId;
    const KIND: &'static str = "community";

    fn id(&self) -> CommunityId {
        self.id
    }
}

impl Record for Membership {
    type Id = CommunityId;
    const KIND: &'static str = "membership";

    fn id(&self) -> CommunityId {
        self.community_id
    }
}

impl Record for UserProfile {
    type Id = UserId;
    const KIND: &'static str = "profile";

    fn id(&self) -> UserId {
        self.id
    }
}

/// Every repository the pages read from, plus the current session.
///
/// Cheap to clone; clones share the same data.
#[derive(Clone)]
pub struct Store {
    pub campaigns: Arc<dyn Repository<Campaign>>,
    pub communities: Arc<dyn Repository<Community>>,
    pub memberships: Arc<dyn Repository<Membership>>,
    pub profiles: Arc<dyn Repository<UserProfile>>,
    session: Arc<RwLock<Session>>,
}

impl Store {
    pub fn new(
        campaigns: Arc<dyn Repository<Campaign>>,
        communities: Arc<dyn Repository<Community>>,
        memberships: Arc<dyn Repository<Membership>>,
        profiles: Arc<dyn Repository<UserProfile>>,
        session: Session,
    ) -> Self {
        Self {
            campaigns,
            communities,
            memberships,
            profiles,
            session: Arc::new(RwLock::new(session)),
        }
    }

    /// In-memory store filled with the mock data set
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::with_records(seed::campaigns())),
            Arc::new(InMemoryRepository::with_records(seed::communities())),
            Arc::new(InMemoryRepository::with_records(seed::memberships())),
            Arc::new(InMemoryRepository::with_records([seed::profile()])),
            seed::session(),
        )
    }

    /// Store whose repositories all point at a remote backend
    pub fn remote(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self::new(
            Arc::new(RemoteRepository::<Campaign>::new(endpoint.clone())),
            Arc::new(RemoteRepository::<Community>::new(endpoint.clone())),
            Arc::new(RemoteRepository::<Membership>::new(endpoint.clone())),
            Arc::new(RemoteRepository::<UserProfile>::new(endpoint)),
            seed::session(),
        )
    }

    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    /// Remember that the session user started a campaign
    pub fn record_created_campaign(&self, id: CampaignId) {
        let mut session = self.session.write();
        if !session.created_campaigns.contains(&id) {
            session.created_campaigns.push(id);
        }
    }

    /// The signed-in user's profile
    pub fn current_profile(&self) -> FundResult<Option<UserProfile>> {
        let user_id = self.session.read().user_id;
        self.profiles.get(user_id)
    }

    /// First unused campaign id
    pub fn next_campaign_id(&self) -> FundResult<CampaignId> {
        Ok(self
            .campaigns
            .list()?
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(CampaignId(1), CampaignId::next))
    }

    /// First unused community id
    pub fn next_community_id(&self) -> FundResult<CommunityId> {
        Ok(self
            .communities
            .list()?
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(CommunityId(1), CommunityId::next))
    }
}

impl Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("session", &*self.session.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FundError;

    #[test]
    fn test_seeded_store_counts() {
        let store = Store::seeded();
        assert_eq!(store.campaigns.list().unwrap().len(), 7);
        assert_eq!(store.communities.list().unwrap().len(), 6);
        assert_eq!(store.memberships.list().unwrap().len(), 3);
        assert!(store.current_profile().unwrap().is_some());
    }

    #[test]
    fn test_next_ids() {
        let store = Store::seeded();
        assert_eq!(store.next_campaign_id().unwrap(), CampaignId(8));
        assert_eq!(store.next_community_id().unwrap(), CommunityId(7));
    }

    #[test]
    fn test_record_created_campaign_once() {
        let store = Store::seeded();
        let before = store.session().created_campaigns.len();
        store.record_created_campaign(CampaignId(99));
        store.record_created_campaign(CampaignId(99));
        assert_eq!(store.session().created_campaigns.len(), before + 1);
    }

    #[test]
    fn test_clones_share_data() {
        let store = Store::seeded();
        let other = store.clone();
        other.memberships.upsert(Membership::joined(CommunityId(5))).unwrap();
        assert!(store.memberships.get(CommunityId(5)).unwrap().is_some());
    }

    #[test]
    fn test_remote_store_is_unavailable() {
        let store = Store::remote("https://api.example.invalid");
        assert!(matches!(
            store.campaigns.list(),
            Err(FundError::BackendUnavailable(_))
        ));
        assert!(store.next_campaign_id().is_err());
    }
}
