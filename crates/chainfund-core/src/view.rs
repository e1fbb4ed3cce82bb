//! Per-page view state.
//!
//! Each page builds one of these on mount and drops it on unmount. They hold
//! the form fields and dialog flags the page needs, and expose the page's
//! actions as methods that take the [`Store`](crate::Store) and a
//! [`Notifier`](crate::Notifier) explicitly. Nothing here is global.

mod auth;
mod campaign;
mod community;
mod creator;
mod dashboard;
mod profile;
mod wallet;

pub use auth::{LoginForm, OtpChannel, RegisterForm};
pub use campaign::{CampaignCard, CampaignDetailState, CampaignListState};
pub use community::{CommunityState, EXIT_APPROVAL_PERCENT, EXIT_VOTING_DAYS};
pub use creator::{
    CampaignDraft, CampaignSummary, CreatorDashboardState, MilestoneDraft, MilestoneField,
    UpdateDraft,
};
pub use dashboard::{
    CommunityCard, CommunityDraft, DashboardState, JoinedCommunity, ProposalDraft,
};
pub use profile::{ProfileCommunity, ProfileField, ProfileState};
pub use wallet::{handshake, WalletConnectState, WalletKind};
