//! Campaign listing and campaign detail pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::action::{parse_amount, reject, ActionOutcome};
use crate::error::{FundError, FundResult, ValidationError};
use crate::metrics::Countdown;
use crate::notify::{Notification, Notifier};
use crate::repository::Store;
use crate::types::{Campaign, CampaignCategory, CampaignId, CampaignStatus, MilestoneStatus, VoteChoice};

/// One tile on the campaign listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCard {
    pub id: CampaignId,
    pub title: String,
    pub summary: String,
    pub image_url: Option<String>,
    pub category: CampaignCategory,
    pub verified: bool,
    pub raised: u64,
    pub goal: u64,
    pub progress: u8,
    /// "15 days left", "Last day", ...
    pub countdown: String,
}

impl CampaignCard {
    pub fn from_campaign(campaign: &Campaign, today: NaiveDate) -> Self {
        Self {
            id: campaign.id,
            title: campaign.title.clone(),
            summary: campaign.summary.clone(),
            image_url: campaign.image_url.clone(),
            category: campaign.category,
            verified: campaign.verified,
            raised: campaign.raised,
            goal: campaign.goal,
            progress: campaign.progress_percent(),
            countdown: Countdown::between(campaign.deadline, today).to_string(),
        }
    }
}

/// Listing page state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignListState {
    pub cards: Vec<CampaignCard>,
    /// Category chip currently selected, `None` for all
    pub filter: Option<CampaignCategory>,
}

impl CampaignListState {
    /// Active campaigns only. Falls back to an empty list if the repository
    /// cannot be read.
    pub fn load(store: &Store, today: NaiveDate) -> Self {
        let cards = match store.campaigns.list() {
            Ok(campaigns) => campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Active)
                .map(|c| CampaignCard::from_campaign(c, today))
                .collect(),
            Err(e) => {
                warn!(error = %e, "failed to load campaigns");
                Vec::new()
            }
        };
        Self {
            cards,
            filter: None,
        }
    }

    pub fn set_filter(&mut self, filter: Option<CampaignCategory>) {
        self.filter = filter;
    }

    /// Cards matching the current filter
    pub fn visible(&self) -> impl Iterator<Item = &CampaignCard> {
        self.cards
            .iter()
            .filter(move |c| self.filter.map_or(true, |f| c.category == f))
    }
}

/// Detail page state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetailState {
    pub campaign: Campaign,
    pub fund_amount: String,
    /// Risk agreement checkbox
    pub agreed: bool,
    /// The user's ballot on the current milestone
    pub milestone_ballot: Option<VoteChoice>,
}

impl CampaignDetailState {
    /// `Ok(None)` when no campaign has this id
    pub fn load(store: &Store, id: CampaignId) -> FundResult<Option<Self>> {
        Ok(store.campaigns.get(id)?.map(|campaign| Self {
            campaign,
            fund_amount: String::new(),
            agreed: false,
            milestone_ballot: None,
        }))
    }

    /// Whether the "Fund This Campaign" button is enabled
    pub fn can_fund(&self) -> bool {
        !self.fund_amount.trim().is_empty() && self.agreed
    }

    pub fn countdown(&self, today: NaiveDate) -> Countdown {
        Countdown::between(self.campaign.deadline, today)
    }

    /// Index of the milestone currently up for approval
    pub fn current_milestone(&self) -> Option<usize> {
        self.campaign
            .milestones
            .iter()
            .position(|m| m.status != MilestoneStatus::Completed)
    }

    /// Pledge the entered amount. The campaign record is not touched; the
    /// raised total only moves when the backend reports it.
    pub fn fund(&mut self, notifier: &dyn Notifier) -> ActionOutcome {
        let amount = match parse_amount("Amount", &self.fund_amount) {
            Ok(amount) => amount,
            Err(e) => return reject(notifier, "Missing Information", &e),
        };
        if !self.agreed {
            return reject(notifier, "Missing Information", &ValidationError::NotConfirmed);
        }

        self.fund_amount.clear();
        self.agreed = false;

        info!(campaign = %self.campaign.id, amount, "campaign funded");
        notifier.notify(Notification::success(
            "Funding Successful!",
            "Your funds are locked until milestone approval.",
        ));
        ActionOutcome::completed()
    }

    /// Vote on the release of the current milestone's funds
    pub fn vote_milestone(
        &mut self,
        choice: VoteChoice,
        notifier: &dyn Notifier,
    ) -> FundResult<ActionOutcome> {
        let index = self
            .current_milestone()
            .ok_or_else(|| FundError::VoteNotFound(format!("milestone of campaign {}", self.campaign.id)))?;
        if self.milestone_ballot.is_some() {
            return Ok(reject(
                notifier,
                "Vote Not Recorded",
                &ValidationError::AlreadyVoted,
            ));
        }

        self.milestone_ballot = Some(choice);
        let milestone = &self.campaign.milestones[index];
        info!(campaign = %self.campaign.id, milestone = %milestone.name, choice = choice.label(), "milestone vote");
        notifier.notify(Notification::success(
            format!("Vote Recorded: {}", choice.label().to_uppercase()),
            format!("Your vote has been recorded for {} approval.", milestone.name),
        ));
        Ok(ActionOutcome::completed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;
    use crate::seed;

    fn water(store: &Store) -> CampaignDetailState {
        CampaignDetailState::load(store, CampaignId(1)).unwrap().unwrap()
    }

    #[test]
    fn test_listing_shows_active_only() {
        let state = CampaignListState::load(&Store::seeded(), seed::reference_date());
        assert_eq!(state.cards.len(), 6);
        assert!(state.cards.iter().all(|c| c.id != CampaignId(7)));

        let first = &state.cards[0];
        assert_eq!(first.progress, 50);
        assert_eq!(first.countdown, "15 days left");
    }

    #[test]
    fn test_listing_filter() {
        let mut state = CampaignListState::load(&Store::seeded(), seed::reference_date());
        assert_eq!(state.visible().count(), 6);
        state.set_filter(Some(CampaignCategory::Health));
        assert!(state.visible().all(|c| c.category == CampaignCategory::Health));
        assert!(state.visible().count() < 6);
    }

    #[test]
    fn test_listing_unavailable_is_empty() {
        let state = CampaignListState::load(&Store::remote("https://x.invalid"), seed::reference_date());
        assert!(state.cards.is_empty());
    }

    #[test]
    fn test_load_unknown_campaign() {
        assert!(CampaignDetailState::load(&Store::seeded(), CampaignId(404))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_can_fund_needs_amount_and_agreement() {
        let mut state = water(&Store::seeded());
        assert!(!state.can_fund());
        state.fund_amount = "100".to_string();
        assert!(!state.can_fund());
        state.agreed = true;
        assert!(state.can_fund());
    }

    #[test]
    fn test_fund_without_agreement_rejected() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = water(&store);
        state.fund_amount = "500".to_string();

        let outcome = state.fund(&log);
        assert_eq!(outcome, ActionOutcome::Rejected);
        assert_eq!(state.campaign.raised, 75_000);
        assert_eq!(log.last().unwrap().title, "Missing Information");
    }

    #[test]
    fn test_fund_leaves_raised() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = water(&store);
        state.fund_amount = "1,000".to_string();
        state.agreed = true;

        assert!(state.fund(&log).is_completed());
        assert_eq!(state.campaign.raised, 75_000);
        assert!(state.fund_amount.is_empty());
        assert!(!state.agreed);
        let stored = store.campaigns.get(CampaignId(1)).unwrap().unwrap();
        assert_eq!(stored.raised, 75_000);
        assert_eq!(log.last().unwrap().title, "Funding Successful!");
    }

    #[test]
    fn test_milestone_vote_once() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = water(&store);
        assert_eq!(state.current_milestone(), Some(1));

        assert!(state
            .vote_milestone(VoteChoice::Yes, &log)
            .unwrap()
            .is_completed());
        assert_eq!(log.last().unwrap().title, "Vote Recorded: YES");
        assert_eq!(
            log.last().unwrap().description,
            "Your vote has been recorded for Field Testing approval."
        );

        let again = state.vote_milestone(VoteChoice::No, &log).unwrap();
        assert_eq!(again, ActionOutcome::Rejected);
        assert_eq!(state.milestone_ballot, Some(VoteChoice::Yes));
    }

    #[test]
    fn test_milestone_vote_when_all_completed() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = CampaignDetailState::load(&store, CampaignId(7)).unwrap().unwrap();
        assert!(state.vote_milestone(VoteChoice::Yes, &log).is_err());
        assert!(log.is_empty());
    }
}
