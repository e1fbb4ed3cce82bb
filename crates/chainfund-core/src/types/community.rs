//! Community pools, their projects, members and open votes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CommunityId, ProjectId, VoteId};
use crate::metrics;

/// Lifecycle label of a community pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommunityStatus {
    #[default]
    Active,
    UnderVoting,
}

impl CommunityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CommunityStatus::Active => "Active",
            CommunityStatus::UnderVoting => "Under Voting",
        }
    }
}

/// Role a member holds inside a community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[default]
    Member,
    Voter,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
            Role::Voter => "Voter",
        }
    }
}

/// Delivery state of a community-funded project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    #[default]
    Pending,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Pending => "Pending",
        }
    }
}

/// A project the community pool is paying for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub requested: u64,
    pub released: u64,
    pub status: ProjectStatus,
    pub latest_update: String,
}

impl Project {
    /// Released share of the requested amount, `0..=100`
    pub fn progress_percent(&self) -> u8 {
        metrics::progress_percent(self.released, self.requested)
    }
}

/// Entry in a community's member roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: Role,
}

impl Member {
    /// Avatar fallback text
    pub fn initials(&self) -> String {
        metrics::initials(&self.name)
    }
}

/// Yes or no
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteChoice {
    Yes,
    No,
}

impl VoteChoice {
    pub fn label(&self) -> &'static str {
        match self {
            VoteChoice::Yes => "yes",
            VoteChoice::No => "no",
        }
    }
}

/// An open question put to the community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: VoteId,
    pub title: String,
    pub description: String,
    pub yes: u32,
    pub no: u32,
    /// Number of members eligible to vote
    pub eligible: u32,
    pub closes_on: NaiveDate,
}

impl Vote {
    /// Share of eligible members that voted yes, `0..=100`
    pub fn approval_percent(&self) -> u8 {
        metrics::progress_percent(u64::from(self.yes), u64::from(self.eligible))
    }
}

/// A named group with a shared fund balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    /// Glyph shown in the avatar circle
    pub logo: String,
    pub description: String,
    /// Pool balance (USD)
    pub total_pool: u64,
    pub member_count: u32,
    pub active_projects: u32,
    pub status: CommunityStatus,
    pub projects: Vec<Project>,
    pub roster: Vec<Member>,
    pub votes: Vec<Vote>,
}

impl Community {
    /// Look up an open vote
    pub fn vote(&self, id: VoteId) -> Option<&Vote> {
        self.votes.iter().find(|v| v.id == id)
    }
}

/// The signed-in user's stake in one community.
///
/// A community is "joined" exactly when a membership for it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub community_id: CommunityId,
    /// Amount the user has paid into the pool (USD)
    pub contribution: u64,
    pub role: Role,
}

impl Membership {
    /// Fresh membership for a newly joined community
    pub fn joined(community_id: CommunityId) -> Self {
        Self {
            community_id,
            contribution: 0,
            role: Role::Member,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote() -> Vote {
        Vote {
            id: VoteId(1),
            title: "Release funds".to_string(),
            description: String::new(),
            yes: 12,
            no: 3,
            eligible: 24,
            closes_on: NaiveDate::from_ymd_opt(2024, 8, 2).unwrap(),
        }
    }

    #[test]
    fn test_vote_approval() {
        assert_eq!(vote().approval_percent(), 50);
    }

    #[test]
    fn test_project_progress_rounds() {
        let project = Project {
            id: ProjectId(1),
            title: "Solar Panel Installation".to_string(),
            description: String::new(),
            requested: 15_000,
            released: 10_000,
            status: ProjectStatus::InProgress,
            latest_update: String::new(),
        };
        assert_eq!(project.progress_percent(), 67);
    }

    #[test]
    fn test_member_initials() {
        let member = Member {
            name: "Alex Johnson".to_string(),
            role: Role::Admin,
        };
        assert_eq!(member.initials(), "AJ");
    }

    #[test]
    fn test_membership_joined_defaults() {
        let m = Membership::joined(CommunityId(4));
        assert_eq!(m.contribution, 0);
        assert_eq!(m.role, Role::Member);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CommunityStatus::UnderVoting.label(), "Under Voting");
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
        assert_eq!(Role::Voter.label(), "Voter");
        assert_eq!(VoteChoice::Yes.label(), "yes");
    }
}
