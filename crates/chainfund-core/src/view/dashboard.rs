//! Communities dashboard: joined pools, pools to discover, quick actions.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::action::{parse_amount, reject, require_filled, ActionOutcome};
use crate::error::{FundError, FundResult};
use crate::notify::{Notification, Notifier};
use crate::repository::Store;
use crate::types::{Community, CommunityId, CommunityStatus, Membership, Role};

/// Community fields shown on dashboard cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityCard {
    pub id: CommunityId,
    pub name: String,
    pub description: String,
    pub total_pool: u64,
    pub member_count: u32,
    pub status: CommunityStatus,
}

impl From<&Community> for CommunityCard {
    fn from(c: &Community) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            description: c.description.clone(),
            total_pool: c.total_pool,
            member_count: c.member_count,
            status: c.status,
        }
    }
}

/// A community the user belongs to, with their stake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedCommunity {
    pub card: CommunityCard,
    pub contribution: u64,
    pub role: Role,
}

/// "Create New Community" dialog fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Optional target amount
    pub goal: String,
}

/// "Create Project Proposal" dialog fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
    pub estimated_cost: String,
}

/// Dashboard page state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub joined: Vec<JoinedCommunity>,
    pub discover: Vec<CommunityCard>,
    pub create_open: bool,
    pub proposal_open: bool,
    pub community_draft: CommunityDraft,
    pub proposal_draft: ProposalDraft,
}

impl DashboardState {
    /// Split communities into joined and discoverable.
    ///
    /// Repository failures are logged and leave both lists empty.
    pub fn load(store: &Store) -> Self {
        match Self::try_load(store) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "failed to load dashboard");
                Self::default()
            }
        }
    }

    fn try_load(store: &Store) -> FundResult<Self> {
        let communities = store.communities.list()?;
        let memberships = store.memberships.list()?;

        let mut joined = Vec::new();
        let mut discover = Vec::new();
        for community in &communities {
            match memberships.iter().find(|m| m.community_id == community.id) {
                Some(m) => joined.push(JoinedCommunity {
                    card: community.into(),
                    contribution: m.contribution,
                    role: m.role,
                }),
                None => discover.push(community.into()),
            }
        }

        Ok(Self {
            joined,
            discover,
            ..Self::default()
        })
    }

    /// Move a discoverable community into the joined list.
    ///
    /// The new entry has no contribution, the `Member` role and `Active`
    /// status. Joining an id that is not discoverable is an error and changes
    /// nothing.
    pub fn join_community(
        &mut self,
        id: CommunityId,
        store: &Store,
        notifier: &dyn Notifier,
    ) -> FundResult<ActionOutcome> {
        let index = self
            .discover
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| FundError::NotDiscoverable(id.to_string()))?;

        let membership = Membership::joined(id);
        store.memberships.upsert(membership.clone())?;

        let mut card = self.discover.remove(index);
        card.status = CommunityStatus::Active;
        info!(community = %id, name = %card.name, "joined community");
        notifier.notify(Notification::success(
            "Joined Successfully!",
            format!("You've joined {}", card.name),
        ));
        self.joined.push(JoinedCommunity {
            card,
            contribution: membership.contribution,
            role: membership.role,
        });
        Ok(ActionOutcome::completed())
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    pub fn open_proposal(&mut self) {
        self.proposal_open = true;
    }

    pub fn close_proposal(&mut self) {
        self.proposal_open = false;
    }

    /// Create a community from the dialog and join it as admin
    pub fn create_community(
        &mut self,
        store: &Store,
        notifier: &dyn Notifier,
    ) -> FundResult<ActionOutcome> {
        let draft = &self.community_draft;
        if let Err(e) = require_filled(&[
            ("Community Name", draft.name.as_str()),
            ("Category", draft.category.as_str()),
            ("Description", draft.description.as_str()),
        ]) {
            return Ok(reject(notifier, "Missing Information", &e));
        }
        let goal = if draft.goal.trim().is_empty() {
            None
        } else {
            match parse_amount("Goal Amount", &draft.goal) {
                Ok(goal) => Some(goal),
                Err(e) => return Ok(reject(notifier, "Invalid Amount", &e)),
            }
        };

        let community = Community {
            id: store.next_community_id()?,
            name: draft.name.trim().to_string(),
            logo: draft
                .name
                .trim()
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default(),
            description: draft.description.trim().to_string(),
            total_pool: 0,
            member_count: 1,
            active_projects: 0,
            status: CommunityStatus::Active,
            projects: Vec::new(),
            roster: Vec::new(),
            votes: Vec::new(),
        };
        let membership = Membership {
            community_id: community.id,
            contribution: 0,
            role: Role::Admin,
        };
        store.communities.upsert(community.clone())?;
        store.memberships.upsert(membership.clone())?;

        info!(community = %community.id, category = %draft.category.trim(), ?goal, "community created");
        notifier.notify(Notification::success(
            "Community Created!",
            "Your new community has been created successfully.",
        ));
        self.joined.push(JoinedCommunity {
            card: (&community).into(),
            contribution: membership.contribution,
            role: membership.role,
        });
        self.community_draft = CommunityDraft::default();
        self.create_open = false;
        Ok(ActionOutcome::completed())
    }

    /// Submit a project proposal for review
    pub fn submit_proposal(&mut self, notifier: &dyn Notifier) -> ActionOutcome {
        let draft = &self.proposal_draft;
        if let Err(e) = require_filled(&[
            ("Project Title", draft.title.as_str()),
            ("Description", draft.description.as_str()),
        ]) {
            return reject(notifier, "Missing Information", &e);
        }
        let cost = match parse_amount("Estimated Cost", &draft.estimated_cost) {
            Ok(cost) => cost,
            Err(e) => return reject(notifier, "Invalid Amount", &e),
        };

        info!(title = %draft.title.trim(), cost, "proposal submitted");
        notifier.notify(Notification::success(
            "Proposal Submitted!",
            "Your project proposal has been submitted for review.",
        ));
        self.proposal_draft = ProposalDraft::default();
        self.proposal_open = false;
        ActionOutcome::completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;

    #[test]
    fn test_load_splits_lists() {
        let state = DashboardState::load(&Store::seeded());
        let joined: Vec<_> = state.joined.iter().map(|j| j.card.id.0).collect();
        let discover: Vec<_> = state.discover.iter().map(|c| c.id.0).collect();
        assert_eq!(joined, vec![1, 2, 3]);
        assert_eq!(discover, vec![4, 5, 6]);
        assert_eq!(state.joined[1].role, Role::Admin);
        assert_eq!(state.joined[1].card.status, CommunityStatus::UnderVoting);
    }

    #[test]
    fn test_load_from_unavailable_backend_is_empty() {
        let state = DashboardState::load(&Store::remote("https://down.invalid"));
        assert!(state.joined.is_empty());
        assert!(state.discover.is_empty());
    }

    #[test]
    fn test_join_unknown_id_changes_nothing() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = DashboardState::load(&store);
        let before = state.clone();

        let err = state
            .join_community(CommunityId(1), &store, &log)
            .unwrap_err();
        assert!(matches!(err, FundError::NotDiscoverable(_)));
        assert_eq!(state, before);
        assert!(log.is_empty());
    }

    #[test]
    fn test_create_community_requires_fields() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = DashboardState::load(&store);
        state.open_create();
        state.community_draft.name = "Makers Guild".to_string();

        let outcome = state.create_community(&store, &log).unwrap();
        assert_eq!(outcome, ActionOutcome::Rejected);
        assert!(state.create_open);
        assert_eq!(state.joined.len(), 3);
        assert_eq!(log.last().unwrap().description, "Category is required");
    }

    #[test]
    fn test_create_community_joins_as_admin() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = DashboardState::load(&store);
        state.open_create();
        state.community_draft = CommunityDraft {
            name: "makers guild".to_string(),
            category: "Technology".to_string(),
            description: "Tools for everyone".to_string(),
            goal: String::new(),
        };

        assert!(state.create_community(&store, &log).unwrap().is_completed());
        assert!(!state.create_open);
        assert_eq!(state.community_draft, CommunityDraft::default());

        let created = state.joined.last().unwrap();
        assert_eq!(created.card.id, CommunityId(7));
        assert_eq!(created.role, Role::Admin);
        let stored = store.communities.get(CommunityId(7)).unwrap().unwrap();
        assert_eq!(stored.logo, "M");
        assert!(store.memberships.get(CommunityId(7)).unwrap().is_some());
    }

    #[test]
    fn test_create_community_rejects_bad_goal() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = DashboardState::load(&store);
        state.community_draft = CommunityDraft {
            name: "Pool".to_string(),
            category: "Health".to_string(),
            description: "d".to_string(),
            goal: "lots".to_string(),
        };
        assert!(!state.create_community(&store, &log).unwrap().is_completed());
        assert!(store.communities.get(CommunityId(7)).unwrap().is_none());
    }

    #[test]
    fn test_submit_proposal() {
        let log = NotificationLog::new();
        let mut state = DashboardState::default();
        state.open_proposal();
        state.proposal_draft = ProposalDraft {
            title: "Community Garden".to_string(),
            description: "Raised beds".to_string(),
            estimated_cost: "4500".to_string(),
        };
        assert!(state.submit_proposal(&log).is_completed());
        assert!(!state.proposal_open);
        assert_eq!(state.proposal_draft, ProposalDraft::default());
        assert_eq!(log.last().unwrap().title, "Proposal Submitted!");
    }

    #[test]
    fn test_submit_proposal_keeps_draft_on_error() {
        let log = NotificationLog::new();
        let mut state = DashboardState::default();
        state.open_proposal();
        state.proposal_draft.title = "Garden".to_string();
        assert!(!state.submit_proposal(&log).is_completed());
        assert!(state.proposal_open);
        assert_eq!(state.proposal_draft.title, "Garden");
    }
}
