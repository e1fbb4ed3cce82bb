//! Creator dashboard: start a campaign, review your campaigns, post updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::action::{parse_amount, reject, require_filled, ActionOutcome};
use crate::error::{FundError, FundResult, ValidationError};
use crate::notify::{Notification, Notifier};
use crate::repository::Store;
use crate::types::{
    Campaign, CampaignCategory, CampaignId, CampaignStatus, CampaignUpdate, Creator, Milestone,
    MilestoneStatus,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const SUMMARY_CHARS: usize = 120;

/// One editable milestone row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDraft {
    pub name: String,
    pub amount: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneField {
    Name,
    Amount,
    Date,
}

impl MilestoneDraft {
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.amount.trim().is_empty() && self.date.trim().is_empty()
    }

    fn build(&self) -> Result<Milestone, ValidationError> {
        require_filled(&[("Milestone Name", self.name.as_str())])?;
        let amount = parse_amount("Milestone Amount", &self.amount)?;
        let target_date = match self.date.trim() {
            "" => None,
            raw => Some(parse_date("Milestone Date", raw)?),
        };
        Ok(Milestone {
            name: self.name.trim().to_string(),
            description: String::new(),
            amount,
            status: MilestoneStatus::Pending,
            target_date,
        })
    }
}

/// "Create New Campaign" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub title: String,
    pub category: Option<CampaignCategory>,
    pub description: String,
    pub goal: String,
    /// `YYYY-MM-DD`
    pub deadline: String,
    /// Cover image path or URL
    pub image: Option<String>,
    /// Never empty
    pub milestones: Vec<MilestoneDraft>,
    /// Agreement checkbox
    pub confirmed: bool,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: None,
            description: String::new(),
            goal: String::new(),
            deadline: String::new(),
            image: None,
            milestones: vec![MilestoneDraft::default()],
            confirmed: false,
        }
    }
}

/// "Submit Update" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDraft {
    /// Campaign the open dialog posts to; `None` when closed
    pub campaign_id: Option<CampaignId>,
    pub content: String,
    pub image: Option<String>,
}

/// Row in "My Campaigns"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub title: String,
    pub goal: u64,
    pub raised: u64,
    pub status: CampaignStatus,
}

impl From<&Campaign> for CampaignSummary {
    fn from(c: &Campaign) -> Self {
        Self {
            id: c.id,
            title: c.title.clone(),
            goal: c.goal,
            raised: c.raised,
            status: c.status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorDashboardState {
    pub draft: CampaignDraft,
    pub my_campaigns: Vec<CampaignSummary>,
    pub update: UpdateDraft,
}

impl CreatorDashboardState {
    /// Load the campaigns the session user created
    pub fn load(store: &Store) -> Self {
        let mut my_campaigns = Vec::new();
        for id in store.session().created_campaigns {
            match store.campaigns.get(id) {
                Ok(Some(c)) => my_campaigns.push(CampaignSummary::from(&c)),
                Ok(None) => warn!(campaign = %id, "created campaign missing from repository"),
                Err(e) => {
                    warn!(error = %e, "failed to load creator campaigns");
                    break;
                }
            }
        }
        Self {
            my_campaigns,
            ..Self::default()
        }
    }

    pub fn add_milestone(&mut self) {
        self.draft.milestones.push(MilestoneDraft::default());
    }

    /// Drop a milestone row. The form always keeps at least one.
    pub fn remove_milestone(&mut self, index: usize) -> Result<(), ValidationError> {
        if self.draft.milestones.len() <= 1 {
            return Err(ValidationError::LastMilestone);
        }
        if index < self.draft.milestones.len() {
            self.draft.milestones.remove(index);
        }
        Ok(())
    }

    pub fn set_milestone_field(&mut self, index: usize, field: MilestoneField, value: String) {
        let Some(row) = self.draft.milestones.get_mut(index) else {
            return;
        };
        match field {
            MilestoneField::Name => row.name = value,
            MilestoneField::Amount => row.amount = value,
            MilestoneField::Date => row.date = value,
        }
    }

    /// Whether the create button is enabled
    pub fn can_submit(&self) -> bool {
        self.draft.confirmed
    }

    fn build_campaign(
        &self,
        store: &Store,
        today: NaiveDate,
    ) -> Result<FundResult<Campaign>, ValidationError> {
        let draft = &self.draft;
        require_filled(&[
            ("Campaign Title", draft.title.as_str()),
            ("Description", draft.description.as_str()),
            ("Funding Goal", draft.goal.as_str()),
            ("Deadline", draft.deadline.as_str()),
        ])?;
        let category = draft
            .category
            .ok_or(ValidationError::MissingField("Category"))?;
        if !draft.confirmed {
            return Err(ValidationError::NotConfirmed);
        }
        let goal = parse_amount("Funding Goal", &draft.goal)?;
        let deadline = parse_date("Deadline", &draft.deadline)?;
        if deadline < today {
            return Err(ValidationError::InvalidDate("Deadline"));
        }
        let milestones = draft
            .milestones
            .iter()
            .filter(|m| !m.is_blank())
            .map(MilestoneDraft::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.assemble(store, category, goal, deadline, milestones))
    }

    fn assemble(
        &self,
        store: &Store,
        category: CampaignCategory,
        goal: u64,
        deadline: NaiveDate,
        milestones: Vec<Milestone>,
    ) -> FundResult<Campaign> {
        let draft = &self.draft;
        let session = store.session();
        let creator_name = store
            .current_profile()?
            .map(|p| p.name)
            .unwrap_or_default();
        let description = draft.description.trim().to_string();
        Ok(Campaign {
            id: store.next_campaign_id()?,
            title: draft.title.trim().to_string(),
            summary: description.chars().take(SUMMARY_CHARS).collect(),
            description,
            image_url: draft.image.clone(),
            category,
            raised: 0,
            goal,
            deadline,
            verified: false,
            status: CampaignStatus::Active,
            creator: Creator {
                id: session.user_id,
                name: creator_name,
                avatar_url: None,
                verified: false,
                past_projects: u32::try_from(session.created_campaigns.len()).unwrap_or(u32::MAX),
            },
            milestones,
            updates: Vec::new(),
        })
    }

    /// Publish the drafted campaign.
    ///
    /// Missing fields, a deadline before `today` or an unchecked agreement
    /// reject the submission with no success notification. On success the
    /// campaign is stored and recorded in the session, it is appended to
    /// "My Campaigns" and the form resets.
    pub fn submit(
        &mut self,
        store: &Store,
        notifier: &dyn Notifier,
        today: NaiveDate,
    ) -> FundResult<ActionOutcome> {
        let campaign = match self.build_campaign(store, today) {
            Ok(built) => built?,
            Err(e) => return Ok(reject(notifier, "Missing Information", &e)),
        };

        store.campaigns.upsert(campaign.clone())?;
        store.record_created_campaign(campaign.id);
        self.my_campaigns.push(CampaignSummary::from(&campaign));
        self.draft = CampaignDraft::default();

        info!(campaign = %campaign.id, title = %campaign.title, goal = campaign.goal, "campaign created");
        notifier.notify(Notification::success(
            "Campaign Created Successfully!",
            "Your campaign is now live and accepting funding.",
        ));
        Ok(ActionOutcome::completed())
    }

    pub fn open_update(&mut self, id: CampaignId) {
        self.update = UpdateDraft {
            campaign_id: Some(id),
            ..UpdateDraft::default()
        };
    }

    pub fn close_update(&mut self) {
        self.update = UpdateDraft::default();
    }

    /// Publish the update dialog's content on its campaign
    pub fn post_update(
        &mut self,
        store: &Store,
        notifier: &dyn Notifier,
        today: NaiveDate,
    ) -> FundResult<ActionOutcome> {
        if let Err(e) = require_filled(&[("Update Content", self.update.content.as_str())]) {
            return Ok(reject(notifier, "Missing Content", &e));
        }
        let Some(id) = self.update.campaign_id else {
            return Ok(reject(
                notifier,
                "Missing Content",
                &ValidationError::MissingField("Campaign"),
            ));
        };

        let Some(mut campaign) = store.campaigns.get(id)? else {
            return Err(FundError::CampaignNotFound(id.to_string()));
        };
        let content = self.update.content.trim().to_string();
        let title = content.lines().next().unwrap_or_default().to_string();
        campaign.updates.insert(
            0,
            CampaignUpdate {
                date: today,
                title,
                content,
                image_url: self.update.image.clone(),
            },
        );
        store.campaigns.upsert(campaign)?;

        info!(campaign = %id, "update posted");
        notifier.notify(Notification::success(
            "Update Posted!",
            "Your project update has been published.",
        ));
        self.close_update();
        Ok(ActionOutcome::completed())
    }
}

fn parse_date(label: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;
    use crate::seed;

    fn filled(state: &mut CreatorDashboardState) {
        state.draft = CampaignDraft {
            title: "Community Library".to_string(),
            category: Some(CampaignCategory::Education),
            description: "Books for everyone.".to_string(),
            goal: "20000".to_string(),
            deadline: "2024-09-30".to_string(),
            image: None,
            milestones: vec![MilestoneDraft {
                name: "Shelving".to_string(),
                amount: "5000".to_string(),
                date: "2024-08-31".to_string(),
            }],
            confirmed: true,
        };
    }

    #[test]
    fn test_load_my_campaigns() {
        let state = CreatorDashboardState::load(&Store::seeded());
        let ids: Vec<_> = state.my_campaigns.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 3, 7]);
        assert_eq!(state.my_campaigns[2].status, CampaignStatus::Completed);
        assert_eq!(state.draft.milestones.len(), 1);
    }

    #[test]
    fn test_last_milestone_cannot_be_removed() {
        let mut state = CreatorDashboardState::default();
        assert_eq!(state.remove_milestone(0), Err(ValidationError::LastMilestone));
        state.add_milestone();
        state.set_milestone_field(1, MilestoneField::Name, "Launch".to_string());
        assert_eq!(state.remove_milestone(0), Ok(()));
        assert_eq!(state.draft.milestones.len(), 1);
        assert_eq!(state.draft.milestones[0].name, "Launch");
    }

    #[test]
    fn test_set_field_out_of_range_ignored() {
        let mut state = CreatorDashboardState::default();
        state.set_milestone_field(5, MilestoneField::Amount, "1".to_string());
        assert_eq!(state.draft.milestones, vec![MilestoneDraft::default()]);
    }

    #[test]
    fn test_unconfirmed_submit_has_no_success() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = CreatorDashboardState::load(&store);
        filled(&mut state);
        state.draft.confirmed = false;
        assert!(!state.can_submit());

        let outcome = state.submit(&store, &log, seed::reference_date()).unwrap();
        assert_eq!(outcome, ActionOutcome::Rejected);
        assert_eq!(log.successes(), 0);
        assert_eq!(store.campaigns.list().unwrap().len(), 7);
        assert_eq!(state.draft.title, "Community Library");
    }

    #[test]
    fn test_submit_creates_campaign() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = CreatorDashboardState::load(&store);
        filled(&mut state);

        let outcome = state.submit(&store, &log, seed::reference_date()).unwrap();
        assert!(outcome.is_completed());
        assert_eq!(state.draft, CampaignDraft::default());
        assert_eq!(state.my_campaigns.last().unwrap().id, CampaignId(8));
        assert!(store.session().created_campaigns.contains(&CampaignId(8)));

        let stored = store.campaigns.get(CampaignId(8)).unwrap().unwrap();
        assert_eq!(stored.goal, 20_000);
        assert_eq!(stored.raised, 0);
        assert_eq!(stored.creator.name, "Alex Johnson");
        assert_eq!(stored.milestones[0].amount, 5_000);
        assert_eq!(log.last().unwrap().title, "Campaign Created Successfully!");
    }

    #[test]
    fn test_submit_rejects_bad_deadline() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = CreatorDashboardState::default();
        filled(&mut state);
        state.draft.deadline = "2024-02-30".to_string();

        assert!(!state.submit(&store, &log, seed::reference_date()).unwrap().is_completed());
        assert_eq!(log.last().unwrap().description, "Deadline must be a valid date");

        state.draft.deadline = "2024-07-01".to_string();
        assert!(!state.submit(&store, &log, seed::reference_date()).unwrap().is_completed());
        assert_eq!(log.successes(), 0);
    }

    #[test]
    fn test_blank_milestone_rows_are_skipped() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = CreatorDashboardState::default();
        filled(&mut state);
        state.add_milestone();

        assert!(state.submit(&store, &log, seed::reference_date()).unwrap().is_completed());
        let stored = store.campaigns.get(CampaignId(8)).unwrap().unwrap();
        assert_eq!(stored.milestones.len(), 1);
    }

    #[test]
    fn test_post_update() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = CreatorDashboardState::load(&store);

        state.open_update(CampaignId(3));
        let empty = state.post_update(&store, &log, seed::reference_date()).unwrap();
        assert_eq!(empty, ActionOutcome::Rejected);
        assert_eq!(log.last().unwrap().title, "Missing Content");
        assert_eq!(state.update.campaign_id, Some(CampaignId(3)));

        state.update.content = "Roof is on\nPanels arrive next week.".to_string();
        assert!(state
            .post_update(&store, &log, seed::reference_date())
            .unwrap()
            .is_completed());
        assert_eq!(state.update, UpdateDraft::default());

        let stored = store.campaigns.get(CampaignId(3)).unwrap().unwrap();
        assert_eq!(stored.updates[0].title, "Roof is on");
        assert_eq!(stored.updates[0].date, seed::reference_date());
    }

    #[test]
    fn test_post_update_unknown_campaign() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = CreatorDashboardState::load(&store);
        state.open_update(CampaignId(999));
        state.update.content = "Shipping soon".to_string();

        let err = state
            .post_update(&store, &log, seed::reference_date())
            .unwrap_err();
        assert!(matches!(err, FundError::CampaignNotFound(_)));
        assert!(log.is_empty());
        assert_eq!(state.update.campaign_id, Some(CampaignId(999)));
        assert!(store.campaigns.get(CampaignId(999)).unwrap().is_none());
    }
}
