//! Fixed sample records inserted by the seeder.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::SeedError;

/// Sample event list bundled with the binary.
const DEFAULT_EVENTS_JSON: &str = include_str!("../../data/events.json");

/// One entry of a published event list.
///
/// Fields other than the ones below are ignored so that richer listings
/// (attendee counts, prices, ratings) can be fed in unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventFixture {
    pub id: i32,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy)]
pub struct UserFixture {
    pub name: &'static str,
    pub email: &'static str,
    pub interests: &'static [&'static str],
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CommunityFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub interests: &'static [&'static str],
}

pub const USERS: [UserFixture; 4] = [
    UserFixture {
        name: "John Doe",
        email: "john@example.com",
        interests: &["technology", "music", "photography"],
        bio: "Tech enthusiast and amateur photographer",
    },
    UserFixture {
        name: "Jane Smith",
        email: "jane@example.com",
        interests: &["art", "literature", "culture"],
        bio: "Artist and book lover",
    },
    UserFixture {
        name: "Raj Kumar",
        email: "raj@example.com",
        interests: &["sports", "fitness", "health"],
        bio: "Fitness trainer and sports enthusiast",
    },
    UserFixture {
        name: "Priya Sharma",
        email: "priya@example.com",
        interests: &["dance", "music", "spirituality"],
        bio: "Classical dancer and meditation practitioner",
    },
];

pub const COMMUNITIES: [CommunityFixture; 5] = [
    CommunityFixture {
        name: "Chennai Tech Hub",
        description: "A community for tech enthusiasts and professionals",
        category: "Technology",
        interests: &["technology", "coding", "innovation"],
    },
    CommunityFixture {
        name: "Arts & Culture Circle",
        description: "Celebrating Chennai's rich cultural heritage",
        category: "Culture",
        interests: &["art", "music", "dance", "literature"],
    },
    CommunityFixture {
        name: "Fitness First",
        description: "Group for fitness enthusiasts and health conscious people",
        category: "Health",
        interests: &["fitness", "health", "sports", "yoga"],
    },
    CommunityFixture {
        name: "Creative Minds",
        description: "Platform for artists and creative professionals",
        category: "Art",
        interests: &["art", "photography", "design"],
    },
    CommunityFixture {
        name: "Nature Lovers",
        description: "Group for environmental awareness and nature activities",
        category: "Environment",
        interests: &["nature", "environment", "photography"],
    },
];

/// Which communities each user joins, as indices into [`USERS`] and
/// [`COMMUNITIES`].
pub const MEMBERSHIPS: [(usize, &[usize]); 4] = [
    // John: Tech and Creative
    (0, &[0, 3]),
    // Jane: Culture and Creative
    (1, &[1, 3]),
    // Raj: Fitness
    (2, &[2]),
    // Priya: Culture and Nature
    (3, &[1, 4]),
];

/// Number of (user, community) pairs described by [`MEMBERSHIPS`].
pub fn membership_count() -> usize {
    MEMBERSHIPS.iter().map(|(_, communities)| communities.len()).sum()
}

/// The bundled sample events.
pub fn default_events() -> Result<Vec<EventFixture>, SeedError> {
    Ok(serde_json::from_str(DEFAULT_EVENTS_JSON)?)
}

/// Read an event list from a JSON file containing an array of events.
pub fn load_events(path: &Path) -> Result<Vec<EventFixture>, SeedError> {
    let file = File::open(path).map_err(|source| SeedError::EventsFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
