//! The signed-in user.

use serde::{Deserialize, Serialize};

use super::{CampaignId, UserId};

/// Contact and wallet details of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Connected wallet, shown verbatim
    pub wallet_address: String,
    pub bio: String,
}

impl UserProfile {
    /// Wallet address cut down for headers (`0x742d35Cc...`)
    pub fn short_wallet(&self) -> String {
        let prefix: String = self.wallet_address.chars().take(10).collect();
        if prefix.len() < self.wallet_address.len() {
            format!("{prefix}...")
        } else {
            prefix
        }
    }
}

/// Who is using the app right now.
///
/// There is no authentication; the session is seeded and lives for the
/// lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    /// Campaigns this user started, in creation order
    pub created_campaigns: Vec<CampaignId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(wallet: &str) -> UserProfile {
        UserProfile {
            id: UserId(1),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            wallet_address: wallet.to_string(),
            bio: String::new(),
        }
    }

    #[test]
    fn test_short_wallet() {
        assert_eq!(
            profile("0x742d35Cc6634C0532925a3b8D").short_wallet(),
            "0x742d35Cc..."
        );
        assert_eq!(profile("0xabc").short_wallet(), "0xabc");
    }
}
