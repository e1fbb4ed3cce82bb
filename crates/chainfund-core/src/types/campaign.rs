//! Poolfunding campaigns and their milestone schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CampaignId, UserId};
use crate::metrics;

/// Category a creator files a campaign under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignCategory {
    Technology,
    Environment,
    Health,
    Education,
    Social,
}

impl CampaignCategory {
    pub const ALL: [CampaignCategory; 5] = [
        CampaignCategory::Technology,
        CampaignCategory::Environment,
        CampaignCategory::Health,
        CampaignCategory::Education,
        CampaignCategory::Social,
    ];

    /// Stable value used in form controls
    pub fn slug(&self) -> &'static str {
        match self {
            CampaignCategory::Technology => "technology",
            CampaignCategory::Environment => "environment",
            CampaignCategory::Health => "health",
            CampaignCategory::Education => "education",
            CampaignCategory::Social => "social",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CampaignCategory::Technology => "Technology",
            CampaignCategory::Environment => "Environment",
            CampaignCategory::Health => "Health",
            CampaignCategory::Education => "Education",
            CampaignCategory::Social => "Social Impact",
        }
    }

    /// Look up a category by its slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Whether a campaign is still accepting funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CampaignStatus {
    #[default]
    Active,
    Completed,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Completed => "Completed",
        }
    }
}

/// Milestone state as shown to backers.
///
/// There are no transition rules between these; the status is data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MilestoneStatus {
    Completed,
    Locked,
    #[default]
    Pending,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::Locked => "Locked",
            MilestoneStatus::Pending => "Pending",
        }
    }
}

/// A named, amount-tagged checkpoint gating fund release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub description: String,
    /// Amount released when the milestone is approved (USD)
    pub amount: u64,
    pub status: MilestoneStatus,
    /// Target date, set for milestones entered on the creator dashboard
    pub target_date: Option<NaiveDate>,
}

/// Progress note posted by the creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignUpdate {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Who is behind a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: UserId,
    pub name: String,
    pub avatar_url: Option<String>,
    pub verified: bool,
    /// Number of previously completed projects
    pub past_projects: u32,
}

/// A single funding proposal
///
/// `raised <= goal` is not enforced: over-funded campaigns simply show 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    /// One-line pitch shown on listing cards
    pub summary: String,
    /// Full description, paragraphs separated by blank lines
    pub description: String,
    pub image_url: Option<String>,
    pub category: CampaignCategory,
    /// Amount pledged so far (USD)
    pub raised: u64,
    /// Funding target (USD)
    pub goal: u64,
    pub deadline: NaiveDate,
    pub verified: bool,
    pub status: CampaignStatus,
    pub creator: Creator,
    pub milestones: Vec<Milestone>,
    /// Newest first
    pub updates: Vec<CampaignUpdate>,
}

impl Campaign {
    /// Funded share of the goal, `0..=100`
    pub fn progress_percent(&self) -> u8 {
        metrics::progress_percent(self.raised, self.goal)
    }

    /// Whole days until the deadline, never negative
    pub fn days_left(&self, today: NaiveDate) -> u32 {
        metrics::days_left(self.deadline, today)
    }

    /// Sum of all milestone amounts
    pub fn milestone_total(&self) -> u64 {
        self.milestones.iter().map(|m| m.amount).sum()
    }

    /// Paragraphs of the description, blank lines dropped
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.description
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(raised: u64, goal: u64) -> Campaign {
        Campaign {
            id: CampaignId(1),
            title: "Test".to_string(),
            summary: String::new(),
            description: "First paragraph.\n\n  Second paragraph.\n".to_string(),
            image_url: None,
            category: CampaignCategory::Technology,
            raised,
            goal,
            deadline: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
            verified: false,
            status: CampaignStatus::Active,
            creator: Creator {
                id: UserId(1),
                name: "Tester".to_string(),
                avatar_url: None,
                verified: false,
                past_projects: 0,
            },
            milestones: vec![
                Milestone {
                    name: "A".to_string(),
                    description: String::new(),
                    amount: 100,
                    status: MilestoneStatus::Completed,
                    target_date: None,
                },
                Milestone {
                    name: "B".to_string(),
                    description: String::new(),
                    amount: 250,
                    status: MilestoneStatus::Pending,
                    target_date: None,
                },
            ],
            updates: vec![],
        }
    }

    #[test]
    fn test_category_slug_roundtrip() {
        for category in CampaignCategory::ALL {
            assert_eq!(CampaignCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(CampaignCategory::from_slug("crypto"), None);
        assert_eq!(CampaignCategory::Social.label(), "Social Impact");
    }

    #[test]
    fn test_campaign_progress() {
        assert_eq!(campaign(75_000, 150_000).progress_percent(), 50);
        assert_eq!(campaign(200, 100).progress_percent(), 100);
        assert_eq!(campaign(10, 0).progress_percent(), 0);
    }

    #[test]
    fn test_milestone_total() {
        assert_eq!(campaign(0, 1).milestone_total(), 350);
    }

    #[test]
    fn test_paragraphs() {
        let c = campaign(0, 1);
        let paragraphs: Vec<_> = c.paragraphs().collect();
        assert_eq!(paragraphs, vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn test_milestone_status_labels() {
        assert_eq!(MilestoneStatus::Completed.label(), "Completed");
        assert_eq!(MilestoneStatus::Locked.label(), "Locked");
        assert_eq!(MilestoneStatus::default(), MilestoneStatus::Pending);
    }
}
