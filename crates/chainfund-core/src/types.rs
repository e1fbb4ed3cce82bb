//! Core types for ChainFund

pub mod campaign;
pub mod community;
pub mod profile;

pub use campaign::{
    Campaign, CampaignCategory, CampaignStatus, CampaignUpdate, Creator, Milestone,
    MilestoneStatus,
};
pub use community::{
    Community, CommunityStatus, Member, Membership, Project, ProjectStatus, Role, Vote,
    VoteChoice,
};
pub use profile::{Session, UserProfile};

use serde::{Deserialize, Serialize};

/// Declares a numeric record identifier.
///
/// Identifiers print as bare numbers so they can be dropped straight into
/// route paths (`/community/4`) and parsed back out of them.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl $name {
            /// The identifier after this one
            pub fn next(self) -> Self {
                Self(self.0.saturating_add(1))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a poolfunding campaign
    CampaignId
);
numeric_id!(
    /// Identifier of a community pool
    CommunityId
);
numeric_id!(
    /// Identifier of a vote within a community
    VoteId
);
numeric_id!(
    /// Identifier of a project funded by a community
    ProjectId
);
numeric_id!(
    /// Identifier of a user account
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_bare_number() {
        assert_eq!(CampaignId(7).to_string(), "7");
        assert_eq!(format!("/community/{}", CommunityId(4)), "/community/4");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("12".parse::<CampaignId>().unwrap(), CampaignId(12));
        assert_eq!(" 3 ".parse::<CommunityId>().unwrap(), CommunityId(3));
        assert!("abc".parse::<CampaignId>().is_err());
        assert!("-1".parse::<CommunityId>().is_err());
    }

    #[test]
    fn test_id_next() {
        assert_eq!(CampaignId(6).next(), CampaignId(7));
        assert_eq!(UserId(u32::MAX).next(), UserId(u32::MAX));
    }
}
