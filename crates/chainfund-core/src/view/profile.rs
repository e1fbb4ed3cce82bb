//! User profile page.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::action::{reject, require_filled, ActionOutcome};
use crate::error::FundResult;
use crate::notify::{Notification, Notifier};
use crate::repository::Store;
use crate::types::{Role, UserProfile};

/// Editable profile fields. The wallet address is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Address,
    Bio,
}

/// A community listed under "My Communities"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCommunity {
    pub name: String,
    pub contribution: u64,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileState {
    /// Last saved copy
    pub saved: UserProfile,
    /// Working copy bound to the inputs
    pub form: UserProfile,
    pub editing: bool,
    pub communities: Vec<ProfileCommunity>,
}

impl ProfileState {
    /// `None` if the session user has no profile or it could not be read
    pub fn load(store: &Store) -> Option<Self> {
        match Self::try_load(store) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "failed to load profile");
                None
            }
        }
    }

    fn try_load(store: &Store) -> FundResult<Option<Self>> {
        let Some(profile) = store.current_profile()? else {
            return Ok(None);
        };
        let mut communities = Vec::new();
        for membership in store.memberships.list()? {
            if let Some(c) = store.communities.get(membership.community_id)? {
                communities.push(ProfileCommunity {
                    name: c.name,
                    contribution: membership.contribution,
                    role: membership.role,
                });
            }
        }
        Ok(Some(Self {
            saved: profile.clone(),
            form: profile,
            editing: false,
            communities,
        }))
    }

    /// Sum of contributions across joined communities
    pub fn total_contributions(&self) -> u64 {
        self.communities
            .iter()
            .fold(0u64, |sum, c| sum.saturating_add(c.contribution))
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    /// Throw away unsaved edits
    pub fn cancel_editing(&mut self) {
        self.form = self.saved.clone();
        self.editing = false;
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.form.name,
            ProfileField::Email => &mut self.form.email,
            ProfileField::Phone => &mut self.form.phone,
            ProfileField::Address => &mut self.form.address,
            ProfileField::Bio => &mut self.form.bio,
        };
        *slot = value;
    }

    pub fn save(&mut self, store: &Store, notifier: &dyn Notifier) -> FundResult<ActionOutcome> {
        if let Err(e) = require_filled(&[
            ("Full Name", self.form.name.as_str()),
            ("Email", self.form.email.as_str()),
        ]) {
            return Ok(reject(notifier, "Missing Information", &e));
        }

        store.profiles.upsert(self.form.clone())?;
        self.saved = self.form.clone();
        self.editing = false;

        info!(user = %self.saved.id, "profile saved");
        notifier.notify(Notification::success(
            "Profile Updated",
            "Your profile has been updated successfully.",
        ));
        Ok(ActionOutcome::completed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLog;
    use crate::types::CommunityId;

    #[test]
    fn test_load_and_total() {
        let state = ProfileState::load(&Store::seeded()).unwrap();
        assert_eq!(state.saved.name, "Alex Johnson");
        assert_eq!(state.communities.len(), 3);
        assert_eq!(state.total_contributions(), 17_500);
    }

    #[test]
    fn test_total_follows_memberships() {
        let store = Store::seeded();
        store.memberships.remove(CommunityId(3)).unwrap();
        let state = ProfileState::load(&store).unwrap();
        assert_eq!(state.total_contributions(), 7_500);
    }

    #[test]
    fn test_load_unavailable() {
        assert!(ProfileState::load(&Store::remote("https://x.invalid")).is_none());
    }

    #[test]
    fn test_cancel_restores_saved() {
        let mut state = ProfileState::load(&Store::seeded()).unwrap();
        state.start_editing();
        state.set_field(ProfileField::Bio, "changed".to_string());
        state.cancel_editing();
        assert!(!state.editing);
        assert_eq!(state.form, state.saved);
    }

    #[test]
    fn test_save_persists() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = ProfileState::load(&store).unwrap();
        state.start_editing();
        state.set_field(ProfileField::Phone, "+1 555 0100".to_string());

        assert!(state.save(&store, &log).unwrap().is_completed());
        assert!(!state.editing);
        assert_eq!(state.saved.phone, "+1 555 0100");
        assert_eq!(store.current_profile().unwrap().unwrap().phone, "+1 555 0100");
        assert_eq!(log.last().unwrap().title, "Profile Updated");
    }

    #[test]
    fn test_save_requires_name() {
        let store = Store::seeded();
        let log = NotificationLog::new();
        let mut state = ProfileState::load(&store).unwrap();
        state.start_editing();
        state.set_field(ProfileField::Name, "  ".to_string());

        assert_eq!(state.save(&store, &log).unwrap(), ActionOutcome::Rejected);
        assert!(state.editing);
        assert_eq!(state.saved.name, "Alex Johnson");
    }
}
