//! Error types for ChainFund

use thiserror::Error;

/// Main error type for ChainFund operations
#[derive(Error, Debug)]
pub enum FundError {
    /// Campaign was not found in the repository
    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    /// Community was not found in the repository
    #[error("Community not found: {0}")]
    CommunityNotFound(String),

    /// Vote was not found on the community
    #[error("Vote not found: {0}")]
    VoteNotFound(String),

    /// The community is already joined (or was never discoverable)
    #[error("Community {0} is not open to join")]
    NotDiscoverable(String),

    /// The backing data service cannot be reached
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// User input was rejected before any state change
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Input rejected by a form or action.
///
/// Each variant is turned into an error notification by the action that
/// raised it; none of them propagate past the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Password and its confirmation differ
    #[error("Passwords don't match")]
    PasswordMismatch,

    /// Amount field is not a positive whole number
    #[error("{0} must be a positive amount")]
    InvalidAmount(&'static str),

    /// Date field is not a YYYY-MM-DD calendar date
    #[error("{0} must be a valid date")]
    InvalidDate(&'static str),

    /// Confirmation checkbox left unticked
    #[error("Confirmation is required")]
    NotConfirmed,

    /// A ballot was already cast on this question
    #[error("You have already voted")]
    AlreadyVoted,

    /// An exit request is already pending
    #[error("Exit request already submitted")]
    ExitAlreadyRequested,

    /// Campaign must keep at least one milestone draft
    #[error("At least one milestone is required")]
    LastMilestone,
}

/// Result type alias using FundError
pub type FundResult<T> = Result<T, FundError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FundError::CampaignNotFound("42".to_string());
        assert_eq!(format!("{}", err), "Campaign not found: 42");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: FundError = ValidationError::MissingField("Project Title").into();
        assert_eq!(err.to_string(), "Project Title is required");
        assert!(matches!(err, FundError::Validation(_)));
    }
}
