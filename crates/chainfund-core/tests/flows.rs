//! End-to-end page flows over the seeded store
//!
//! Each test drives view states the way the desktop pages do and checks
//! what other pages see afterwards through the shared repositories.

use std::time::Duration;

use chainfund_core::metrics;
use chainfund_core::seed;
use chainfund_core::view::{
    CampaignDetailState, CampaignDraft, CampaignListState, CommunityState, CreatorDashboardState,
    DashboardState, MilestoneDraft, ProfileState, RegisterForm, WalletConnectState, WalletKind,
};
use chainfund_core::{
    ActionOutcome, CampaignCategory, CampaignId, CommunityId, CommunityStatus, Destination,
    NotificationLog, Role, Store,
};

// ============================================================================
// Dashboard
// ============================================================================

#[test]
fn test_join_ai_research_fund() {
    let store = Store::seeded();
    let log = NotificationLog::new();
    let mut dashboard = DashboardState::load(&store);
    assert_eq!((dashboard.joined.len(), dashboard.discover.len()), (3, 3));

    let outcome = dashboard
        .join_community(CommunityId(4), &store, &log)
        .unwrap();
    assert!(outcome.is_completed());
    assert_eq!((dashboard.joined.len(), dashboard.discover.len()), (4, 2));

    let joined = dashboard.joined.last().unwrap();
    assert_eq!(joined.card.name, "AI Research Fund");
    assert_eq!(joined.contribution, 0);
    assert_eq!(joined.role, Role::Member);
    assert_eq!(joined.card.status, CommunityStatus::Active);
    assert_eq!(joined.card.member_count, 32);
    assert_eq!(
        dashboard
            .joined
            .iter()
            .filter(|j| j.card.id == CommunityId(4))
            .count(),
        1
    );
    assert_eq!(log.last().unwrap().description, "You've joined AI Research Fund");

    // a second join is refused and nothing moves
    assert!(dashboard
        .join_community(CommunityId(4), &store, &log)
        .is_err());
    assert_eq!((dashboard.joined.len(), dashboard.discover.len()), (4, 2));

    // a fresh mount sees the membership
    let reloaded = DashboardState::load(&store);
    assert_eq!((reloaded.joined.len(), reloaded.discover.len()), (4, 2));
}

#[test]
fn test_force_exit_returns_community_to_discover() {
    let store = Store::seeded();
    let log = NotificationLog::new();
    let mut community = CommunityState::load(&store, CommunityId(2)).unwrap().unwrap();

    let outcome = community
        .force_exit(&store, &log, Duration::from_millis(1_500))
        .unwrap();
    assert_eq!(outcome.navigation().map(|n| n.to), Some(Destination::Dashboard));

    let dashboard = DashboardState::load(&store);
    assert!(dashboard.discover.iter().any(|c| c.id == CommunityId(2)));
    assert_eq!(dashboard.joined.len(), 2);

    let profile = ProfileState::load(&store).unwrap();
    assert_eq!(profile.total_contributions(), 12_500);
}

#[test]
fn test_join_and_leave_keeps_member_count() {
    let store = Store::seeded();
    let log = NotificationLog::new();
    let id = CommunityId(4);
    let start = store.communities.get(id).unwrap().unwrap().member_count;
    assert_eq!(start, 32);

    for _ in 0..3 {
        let mut dashboard = DashboardState::load(&store);
        dashboard.join_community(id, &store, &log).unwrap();
        let mut community = CommunityState::load(&store, id).unwrap().unwrap();
        assert!(community.is_member());
        assert_eq!(community.community.member_count, start);
        community.force_exit(&store, &log, Duration::ZERO).unwrap();
    }

    let end = store.communities.get(id).unwrap().unwrap().member_count;
    assert_eq!(end, start);
    let dashboard = DashboardState::load(&store);
    let card = dashboard.discover.iter().find(|c| c.id == id).unwrap();
    assert_eq!(card.member_count, start);
}

// ============================================================================
// Campaigns
// ============================================================================

#[test]
fn test_unconfirmed_campaign_emits_no_success() {
    let store = Store::seeded();
    let log = NotificationLog::new();
    let mut creator = CreatorDashboardState::load(&store);
    creator.draft = CampaignDraft {
        title: "Clean Rivers".to_string(),
        category: Some(CampaignCategory::Environment),
        description: "River cleanup drones".to_string(),
        goal: "30000".to_string(),
        deadline: "2024-10-01".to_string(),
        image: None,
        milestones: vec![MilestoneDraft::default()],
        confirmed: false,
    };

    let outcome = creator.submit(&store, &log, seed::reference_date()).unwrap();
    assert_eq!(outcome, ActionOutcome::Rejected);
    assert_eq!(log.successes(), 0);
    assert_eq!(log.errors(), 1);
}

#[test]
fn test_created_campaign_appears_on_listing() {
    let store = Store::seeded();
    let log = NotificationLog::new();
    let today = seed::reference_date();
    let mut creator = CreatorDashboardState::load(&store);
    creator.draft = CampaignDraft {
        title: "Clean Rivers".to_string(),
        category: Some(CampaignCategory::Environment),
        description: "River cleanup drones".to_string(),
        goal: "30000".to_string(),
        deadline: "2024-08-10".to_string(),
        image: None,
        milestones: vec![MilestoneDraft::default()],
        confirmed: true,
    };
    assert!(creator.submit(&store, &log, today).unwrap().is_completed());

    let listing = CampaignListState::load(&store, today);
    let card = listing
        .cards
        .iter()
        .find(|c| c.title == "Clean Rivers")
        .unwrap();
    assert_eq!(card.progress, 0);
    assert_eq!(card.countdown, "10 days left");
}

#[test]
fn test_funding_leaves_listing_unchanged() {
    let store = Store::seeded();
    let log = NotificationLog::new();
    let today = seed::reference_date();
    let mut detail = CampaignDetailState::load(&store, CampaignId(5)).unwrap().unwrap();
    detail.fund_amount = "42000".to_string();
    detail.agreed = true;
    assert!(detail.fund(&log).is_completed());
    assert_eq!(log.last().unwrap().title, "Funding Successful!");

    let listing = CampaignListState::load(&store, today);
    let card = listing.cards.iter().find(|c| c.id == CampaignId(5)).unwrap();
    assert_eq!(card.raised, 18_000);
    assert_eq!(card.progress, 30);
}

#[test]
fn test_seeded_progress_matches_rounding() {
    for campaign in seed::campaigns() {
        let expected = (campaign.raised as f64 / campaign.goal as f64 * 100.0).round() as u8;
        assert_eq!(campaign.progress_percent(), expected, "{}", campaign.title);
    }
    for community in seed::communities() {
        for project in &community.projects {
            let expected = (project.released as f64 / project.requested as f64 * 100.0).round() as u8;
            assert_eq!(project.progress_percent(), expected, "{}", project.title);
        }
    }
}

#[test]
fn test_seeded_countdowns_on_reference_date() {
    let today = seed::reference_date();
    let labels: Vec<String> = seed::campaigns()
        .iter()
        .take(6)
        .map(|c| metrics::Countdown::between(c.deadline, today).to_string())
        .collect();
    assert_eq!(
        labels,
        [
            "15 days left",
            "22 days left",
            "8 days left",
            "30 days left",
            "12 days left",
            "18 days left"
        ]
    );
}

// ============================================================================
// Onboarding
// ============================================================================

#[test]
fn test_register_then_connect_wallet() {
    let log = NotificationLog::new();
    let mut form = RegisterForm {
        name: "Ada".to_string(),
        phone: "555".to_string(),
        email: "ada@example.com".to_string(),
        address: "1 Loop".to_string(),
        password: "pw".to_string(),
        retype_password: "pw".to_string(),
    };
    let to = form.submit(&log).navigation().map(|n| n.to);
    assert_eq!(to, Some(Destination::WalletConnect));

    let mut wallet = WalletConnectState::new();
    assert!(wallet.begin(WalletKind::MetaMask));
    let nav = wallet
        .complete(&log, Duration::from_millis(1_500))
        .navigation()
        .unwrap();
    assert_eq!(nav.to, Destination::Dashboard);
    assert_eq!(nav.after, Duration::from_millis(1_500));
    assert_eq!(log.successes(), 2);
}
