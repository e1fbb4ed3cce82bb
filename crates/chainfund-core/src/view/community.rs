//! Community detail page: projects, members, votes and leaving the pool.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::action::{reject, ActionOutcome, Destination, Navigation};
use crate::error::{FundError, FundResult, ValidationError};
use crate::notify::{Notification, Notifier};
use crate::repository::Store;
use crate::types::{Community, CommunityId, Membership, VoteChoice, VoteId};

/// Length of the member vote on an exit request
pub const EXIT_VOTING_DAYS: u32 = 7;

/// Approval needed to leave with funds
pub const EXIT_APPROVAL_PERCENT: u8 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityState {
    pub community: Community,
    /// `None` when viewing a community the user has not joined
    pub membership: Option<Membership>,
    /// Ballots this user cast, by vote
    pub ballots: BTreeMap<VoteId, VoteChoice>,
    pub vote_open: bool,
    pub exit_open: bool,
    pub force_exit_open: bool,
    pub exit_requested: bool,
    /// Set once the user force-exited
    pub left: bool,
}

impl CommunityState {
    /// `Ok(None)` when no community has this id
    pub fn load(store: &Store, id: CommunityId) -> FundResult<Option<Self>> {
        let Some(community) = store.communities.get(id)? else {
            return Ok(None);
        };
        let membership = store.memberships.get(id)?;
        Ok(Some(Self {
            community,
            membership,
            ballots: BTreeMap::new(),
            vote_open: false,
            exit_open: false,
            force_exit_open: false,
            exit_requested: false,
            left: false,
        }))
    }

    pub fn is_member(&self) -> bool {
        self.membership.is_some() && !self.left
    }

    pub fn ballot(&self, vote: VoteId) -> Option<VoteChoice> {
        self.ballots.get(&vote).copied()
    }

    /// Record a yes/no ballot on an open vote, once per vote. Only the
    /// user's ballot is kept; the vote counts are left as published.
    pub fn cast_vote(
        &mut self,
        vote: VoteId,
        choice: VoteChoice,
        notifier: &dyn Notifier,
    ) -> FundResult<ActionOutcome> {
        if self.community.vote(vote).is_none() {
            return Err(FundError::VoteNotFound(vote.to_string()));
        }
        if self.ballots.contains_key(&vote) {
            return Ok(reject(
                notifier,
                "Vote Not Recorded",
                &ValidationError::AlreadyVoted,
            ));
        }

        self.ballots.insert(vote, choice);
        self.vote_open = false;

        info!(community = %self.community.id, %vote, choice = choice.label(), "vote cast");
        notifier.notify(Notification::success(
            "Vote Submitted",
            format!("Your {} vote has been recorded.", choice.label()),
        ));
        Ok(ActionOutcome::completed())
    }

    /// Ask the community to approve leaving with funds
    pub fn request_exit(&mut self, notifier: &dyn Notifier) -> ActionOutcome {
        if self.exit_requested {
            return reject(
                notifier,
                "Exit Request Pending",
                &ValidationError::ExitAlreadyRequested,
            );
        }
        self.exit_requested = true;
        self.exit_open = false;
        info!(community = %self.community.id, days = EXIT_VOTING_DAYS, "exit requested");
        notifier.notify(Notification::success(
            "Exit Request Submitted",
            "Your exit request is now awaiting community votes.",
        ));
        ActionOutcome::completed()
    }

    /// Leave immediately, forfeiting the contribution, then return to the
    /// dashboard after `redirect_delay`. The community record is left as is.
    pub fn force_exit(
        &mut self,
        store: &Store,
        notifier: &dyn Notifier,
        redirect_delay: Duration,
    ) -> FundResult<ActionOutcome> {
        let id = self.community.id;
        if store.memberships.remove(id)?.is_none() {
            debug!(community = %id, "force exit without membership");
        }
        self.membership = None;
        self.left = true;
        self.force_exit_open = false;

        info!(community = %id, "force exit");
        notifier.notify(Notification::success(
            "You have left this community",
            "You have been removed from the community with no refund.",
        ));
        Ok(ActionOutcome::completed_then(Navigation::after(
            Destination::Dashboard,
            redirect_delay,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;

    fn green(store: &Store) -> CommunityState {
        CommunityState::load(store, CommunityId(1)).unwrap().unwrap()
    }

    #[test]
    fn test_load_unknown_is_none() {
        let store = Store::seeded();
        assert!(CommunityState::load(&store, CommunityId(42)).unwrap().is_none());
    }

    #[test]
    fn test_load_discoverable_has_no_membership() {
        let store = Store::seeded();
        let state = CommunityState::load(&store, CommunityId(5)).unwrap().unwrap();
        assert!(!state.is_member());
    }

    #[test]
    fn test_cast_vote_once() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = green(&store);
        state.vote_open = true;

        let outcome = state.cast_vote(VoteId(1), VoteChoice::Yes, &log).unwrap();
        assert!(outcome.is_completed());
        assert!(!state.vote_open);
        assert_eq!(state.ballot(VoteId(1)), Some(VoteChoice::Yes));
        assert_eq!(log.last().unwrap().description, "Your yes vote has been recorded.");

        let again = state.cast_vote(VoteId(1), VoteChoice::No, &log).unwrap();
        assert_eq!(again, ActionOutcome::Rejected);
        assert_eq!(log.last().unwrap().description, "You have already voted");
    }

    #[test]
    fn test_cast_vote_leaves_counts() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = green(&store);
        let before = state.community.vote(VoteId(1)).cloned().unwrap();

        state.cast_vote(VoteId(1), VoteChoice::Yes, &log).unwrap();
        let after = state.community.vote(VoteId(1)).unwrap();
        assert_eq!((after.yes, after.no), (before.yes, before.no));

        let stored = store.communities.get(CommunityId(1)).unwrap().unwrap();
        let stored = stored.vote(VoteId(1)).unwrap();
        assert_eq!((stored.yes, stored.no), (12, 3));
    }

    #[test]
    fn test_cast_vote_unknown() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = green(&store);
        let err = state.cast_vote(VoteId(9), VoteChoice::No, &log).unwrap_err();
        assert!(matches!(err, FundError::VoteNotFound(_)));
        assert!(log.is_empty());
    }

    #[test]
    fn test_request_exit_once() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = green(&store);
        state.exit_open = true;

        assert!(state.request_exit(&log).is_completed());
        assert!(state.exit_requested);
        assert!(!state.exit_open);
        assert!(!state.request_exit(&log).is_completed());
        assert_eq!((log.successes(), log.errors()), (1, 1));
    }

    #[test]
    fn test_force_exit_removes_membership() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = green(&store);
        let members = state.community.member_count;

        let outcome = state
            .force_exit(&store, &log, Duration::from_millis(1_500))
            .unwrap();
        assert_eq!(
            outcome.navigation(),
            Some(Navigation::after(
                Destination::Dashboard,
                Duration::from_millis(1_500)
            ))
        );
        assert!(state.left);
        assert!(!state.is_member());
        assert_eq!(state.community.member_count, members);
        let stored = store.communities.get(CommunityId(1)).unwrap().unwrap();
        assert_eq!(stored.member_count, members);
        assert!(store.memberships.get(CommunityId(1)).unwrap().is_none());
        assert_eq!(log.last().unwrap().title, "You have left this community");
    }
}
