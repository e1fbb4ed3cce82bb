//! Mock data set the app starts with.
//!
//! Deadlines are written against [`reference_date`]; run the app with
//! `--today 2024-07-31` to see the countdowns as they were designed.

use chrono::NaiveDate;

use crate::types::{
    Campaign, CampaignCategory, CampaignId, CampaignStatus, CampaignUpdate, Community,
    CommunityId, CommunityStatus, Creator, Member, Membership, Milestone, MilestoneStatus,
    Project, ProjectId, ProjectStatus, Role, Session, UserId, UserProfile, Vote, VoteId,
};

/// Id of the seeded session user
pub const SESSION_USER: UserId = UserId(1);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The day the mock countdowns were authored on
pub fn reference_date() -> NaiveDate {
    date(2024, 7, 31)
}

fn milestone(name: &str, description: &str, amount: u64, status: MilestoneStatus) -> Milestone {
    Milestone {
        name: name.to_string(),
        description: description.to_string(),
        amount,
        status,
        target_date: None,
    }
}

fn creator(id: u32, name: &str, verified: bool, past_projects: u32) -> Creator {
    Creator {
        id: UserId(id),
        name: name.to_string(),
        avatar_url: None,
        verified,
        past_projects,
    }
}

fn unsplash(photo: &str, w: u32, h: u32) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/photo-{photo}?w={w}&h={h}&fit=crop"
    ))
}

const WATER_DESCRIPTION: &str = "We are developing an innovative water purification system that can provide clean, safe drinking water to rural communities worldwide. Our technology uses advanced filtration combined with UV sterilization to remove 99.9% of harmful bacteria, viruses, and contaminants.

The device is solar-powered, making it completely sustainable and perfect for areas without reliable electricity. Each unit can purify up to 500 liters of water per day, enough to serve a small community of 50-100 people.

This project addresses one of the most critical global challenges - access to clean water. With your support, we can manufacture and deploy these systems to communities in need across developing countries.";

/// All campaigns: six listed on the poolfunding page plus one completed
/// creator campaign
pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: CampaignId(1),
            title: "Revolutionary Water Purification System".to_string(),
            summary: "Developing an affordable water filtration device for rural communities worldwide."
                .to_string(),
            description: WATER_DESCRIPTION.to_string(),
            image_url: unsplash("1581091226825-a6a2a5aee158", 800, 400),
            category: CampaignCategory::Health,
            raised: 75_000,
            goal: 150_000,
            deadline: date(2024, 8, 15),
            verified: true,
            status: CampaignStatus::Active,
            creator: Creator {
                avatar_url: Some(
                    "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=100&h=100&fit=crop&crop=face"
                        .to_string(),
                ),
                ..creator(2, "Dr. Sarah Chen", true, 3)
            },
            milestones: vec![
                milestone(
                    "Prototype Development",
                    "Complete initial prototype and testing",
                    30_000,
                    MilestoneStatus::Completed,
                ),
                milestone(
                    "Field Testing",
                    "Deploy prototypes in 3 test communities",
                    45_000,
                    MilestoneStatus::Locked,
                ),
                milestone(
                    "Manufacturing Setup",
                    "Set up production line and quality control",
                    50_000,
                    MilestoneStatus::Pending,
                ),
                milestone(
                    "Community Deployment",
                    "Deploy systems to 10 target communities",
                    25_000,
                    MilestoneStatus::Pending,
                ),
            ],
            updates: vec![
                CampaignUpdate {
                    date: date(2024, 7, 20),
                    title: "Prototype Testing Complete!".to_string(),
                    content: "We've successfully completed all laboratory tests. The system achieves 99.97% purification efficiency."
                        .to_string(),
                    image_url: unsplash("1582719471384-894fbb16e074", 200, 150),
                },
                CampaignUpdate {
                    date: date(2024, 7, 15),
                    title: "Manufacturing Partner Confirmed".to_string(),
                    content: "We've secured a partnership with GreenTech Manufacturing for production scaling."
                        .to_string(),
                    image_url: None,
                },
            ],
        },
        Campaign {
            id: CampaignId(2),
            title: "Smart Urban Farming Platform".to_string(),
            summary: "AI-powered vertical farming solution to grow fresh produce in urban environments."
                .to_string(),
            description: "Vertical farms run by computer vision and climate control, placed on unused rooftops so city neighbourhoods can grow their own greens year round."
                .to_string(),
            image_url: unsplash("1500673922987-e212871fec22", 400, 200),
            category: CampaignCategory::Technology,
            raised: 42_000,
            goal: 100_000,
            deadline: date(2024, 8, 22),
            verified: true,
            status: CampaignStatus::Active,
            creator: creator(3, "Marcus Oyelaran", true, 1),
            milestones: vec![
                milestone("Pilot Rooftop", "Install the first rooftop farm", 40_000, MilestoneStatus::Locked),
                milestone("Sensor Network", "Deploy climate and yield sensors", 60_000, MilestoneStatus::Pending),
            ],
            updates: vec![],
        },
        Campaign {
            id: CampaignId(3),
            title: "Solar-Powered Education Hub".to_string(),
            summary: "Building sustainable learning centers with solar power for remote communities."
                .to_string(),
            description: "Each hub is a classroom with its own solar array, battery bank and offline library, built with local labour in villages without grid power."
                .to_string(),
            image_url: unsplash("1506744038136-46273834b3fb", 400, 200),
            category: CampaignCategory::Education,
            raised: 28_000,
            goal: 80_000,
            deadline: date(2024, 8, 8),
            verified: false,
            status: CampaignStatus::Active,
            creator: creator(1, "Alex Johnson", false, 0),
            milestones: vec![
                milestone("Site Survey", "Select three host villages", 10_000, MilestoneStatus::Completed),
                milestone("First Hub", "Build and equip the first hub", 70_000, MilestoneStatus::Pending),
            ],
            updates: vec![],
        },
        Campaign {
            id: CampaignId(4),
            title: "Blockchain Supply Chain Tracker".to_string(),
            summary: "Transparent tracking system for food safety and authenticity verification."
                .to_string(),
            description: "Producers tag every batch at harvest; distributors and shops scan it at each hand-off so buyers can trace their food back to the farm."
                .to_string(),
            image_url: unsplash("1518770660439-4636190af475", 400, 200),
            category: CampaignCategory::Technology,
            raised: 95_000,
            goal: 120_000,
            deadline: date(2024, 8, 30),
            verified: true,
            status: CampaignStatus::Active,
            creator: creator(4, "Priya Natarajan", true, 2),
            milestones: vec![
                milestone("Ledger MVP", "Tag and trace a single product line", 50_000, MilestoneStatus::Completed),
                milestone("Retail Rollout", "Onboard partner grocery chains", 70_000, MilestoneStatus::Locked),
            ],
            updates: vec![],
        },
        Campaign {
            id: CampaignId(5),
            title: "Eco-Friendly Packaging Innovation".to_string(),
            summary: "Biodegradable packaging made from agricultural waste materials.".to_string(),
            description: "Rice husks and corn stalks pressed into food-safe trays and mailers that compost in under ninety days."
                .to_string(),
            image_url: unsplash("1501854140801-50d01698950b", 400, 200),
            category: CampaignCategory::Environment,
            raised: 18_000,
            goal: 60_000,
            deadline: date(2024, 8, 12),
            verified: false,
            status: CampaignStatus::Active,
            creator: creator(5, "Tomás Ferreira", false, 0),
            milestones: vec![milestone(
                "Material Trials",
                "Certify compostability of three blends",
                60_000,
                MilestoneStatus::Pending,
            )],
            updates: vec![],
        },
        Campaign {
            id: CampaignId(6),
            title: "Mental Health Support App".to_string(),
            summary: "AI-powered mental wellness platform connecting users with professional support."
                .to_string(),
            description: "Guided check-ins triage how someone is doing and route them to peer groups or licensed counsellors, with crisis escalation built in."
                .to_string(),
            image_url: unsplash("1486312338219-ce68d2c6f44d", 400, 200),
            category: CampaignCategory::Health,
            raised: 67_000,
            goal: 90_000,
            deadline: date(2024, 8, 18),
            verified: true,
            status: CampaignStatus::Active,
            creator: creator(6, "Hannah Becker", true, 4),
            milestones: vec![
                milestone("Clinical Review", "Protocol review by licensed clinicians", 30_000, MilestoneStatus::Completed),
                milestone("Public Beta", "Open the app to the first 5,000 users", 60_000, MilestoneStatus::Locked),
            ],
            updates: vec![],
        },
        Campaign {
            id: CampaignId(7),
            title: "Smart Farming App".to_string(),
            summary: "Irrigation scheduling for smallholder farms.".to_string(),
            description: "Soil moisture readings and weather forecasts combined into a daily watering plan sent by SMS."
                .to_string(),
            image_url: None,
            category: CampaignCategory::Technology,
            raised: 50_000,
            goal: 50_000,
            deadline: date(2024, 6, 30),
            verified: true,
            status: CampaignStatus::Completed,
            creator: creator(1, "Alex Johnson", false, 0),
            milestones: vec![milestone(
                "Launch",
                "Ship the app to partner cooperatives",
                50_000,
                MilestoneStatus::Completed,
            )],
            updates: vec![],
        },
    ]
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    requested: u64,
    released: u64,
    status: ProjectStatus,
    latest_update: &str,
) -> Project {
    Project {
        id: ProjectId(id),
        title: title.to_string(),
        description: description.to_string(),
        requested,
        released,
        status,
        latest_update: latest_update.to_string(),
    }
}

fn member(name: &str, role: Role) -> Member {
    Member {
        name: name.to_string(),
        role,
    }
}

fn community(
    id: u32,
    name: &str,
    logo: &str,
    description: &str,
    total_pool: u64,
    member_count: u32,
    active_projects: u32,
    status: CommunityStatus,
) -> Community {
    Community {
        id: CommunityId(id),
        name: name.to_string(),
        logo: logo.to_string(),
        description: description.to_string(),
        total_pool,
        member_count,
        active_projects,
        status,
        projects: Vec::new(),
        roster: Vec::new(),
        votes: Vec::new(),
    }
}

/// Three communities the session user belongs to and three to discover
pub fn communities() -> Vec<Community> {
    let mut green = community(
        1,
        "Green Energy Fund",
        "\u{1F331}",
        "Pooling funds for renewable energy in our neighbourhood",
        45_000,
        24,
        3,
        CommunityStatus::Active,
    );
    green.projects = vec![
        project(
            1,
            "Solar Panel Installation",
            "Installing solar panels for community building",
            15_000,
            10_000,
            ProjectStatus::InProgress,
            "Installation phase 1 completed successfully",
        ),
        project(
            2,
            "Wind Turbine Project",
            "Small wind turbine for renewable energy",
            20_000,
            20_000,
            ProjectStatus::Completed,
            "Project completed and operational",
        ),
        project(
            3,
            "Battery Storage System",
            "Energy storage for renewable sources",
            10_000,
            0,
            ProjectStatus::Pending,
            "Awaiting community approval",
        ),
    ];
    green.roster = vec![
        member("Alex Johnson", Role::Admin),
        member("Sarah Chen", Role::Member),
        member("Mike Davis", Role::Voter),
        member("Lisa Wang", Role::Member),
    ];
    green.votes = vec![Vote {
        id: VoteId(1),
        title: "Release funds for Battery Storage System".to_string(),
        description: "Approve $5,000 for phase 1 of battery installation".to_string(),
        yes: 12,
        no: 3,
        eligible: 24,
        closes_on: date(2024, 8, 2),
    }];

    vec![
        green,
        community(
            2,
            "Tech Startup Pool",
            "\u{1F680}",
            "Backing early-stage founders chosen by member vote",
            120_000,
            48,
            5,
            CommunityStatus::UnderVoting,
        ),
        community(
            3,
            "Real Estate Collective",
            "\u{1F3E0}",
            "Co-owning rental properties and sharing the income",
            250_000,
            85,
            2,
            CommunityStatus::Active,
        ),
        community(
            4,
            "AI Research Fund",
            "\u{1F916}",
            "Supporting artificial intelligence research and development projects",
            75_000,
            32,
            4,
            CommunityStatus::Active,
        ),
        community(
            5,
            "Healthcare Innovation",
            "\u{1FA7A}",
            "Funding breakthrough medical technologies and treatments",
            150_000,
            67,
            6,
            CommunityStatus::Active,
        ),
        community(
            6,
            "Education Access Pool",
            "\u{1F4DA}",
            "Providing educational resources and scholarships globally",
            95_000,
            156,
            8,
            CommunityStatus::Active,
        ),
    ]
}

/// The session user's stakes in communities 1 to 3
pub fn memberships() -> Vec<Membership> {
    vec![
        Membership {
            community_id: CommunityId(1),
            contribution: 2_500,
            role: Role::Member,
        },
        Membership {
            community_id: CommunityId(2),
            contribution: 5_000,
            role: Role::Admin,
        },
        Membership {
            community_id: CommunityId(3),
            contribution: 10_000,
            role: Role::Voter,
        },
    ]
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: SESSION_USER,
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        address: "123 Blockchain Ave, Crypto City, CC 12345".to_string(),
        wallet_address: "0x742d35Cc6634C0532925a3b8D".to_string(),
        bio: "Passionate about sustainable technology and community-driven investments."
            .to_string(),
    }
}

pub fn session() -> Session {
    Session {
        user_id: SESSION_USER,
        created_campaigns: vec![CampaignId(1), CampaignId(3), CampaignId(7)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_campaign_ids_unique() {
        let ids: HashSet<_> = campaigns().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), campaigns().len());
    }

    #[test]
    fn test_listing_countdowns_match_reference_date() {
        let today = reference_date();
        let days: Vec<u32> = campaigns()
            .iter()
            .take(6)
            .map(|c| c.days_left(today))
            .collect();
        assert_eq!(days, vec![15, 22, 8, 30, 12, 18]);
    }

    #[test]
    fn test_water_milestones_cover_goal() {
        let water = &campaigns()[0];
        assert_eq!(water.milestone_total(), water.goal);
    }

    #[test]
    fn test_memberships_reference_existing_communities() {
        let ids: HashSet<_> = communities().iter().map(|c| c.id).collect();
        for m in memberships() {
            assert!(ids.contains(&m.community_id));
        }
    }

    #[test]
    fn test_session_campaigns_exist() {
        let ids: HashSet<_> = campaigns().iter().map(|c| c.id).collect();
        for id in session().created_campaigns {
            assert!(ids.contains(&id));
        }
    }
}
