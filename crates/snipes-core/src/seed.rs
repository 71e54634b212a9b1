//! Demo group loaded at startup.
//!
//! Creates the "Biryani Baes SNIPES" group with its eleven players and the
//! tallies they carried into the service. Seeding is optional and
//! controlled by `store.seed_demo_group` in the configuration.

use snipes_types::{Group, GroupId, Player, PlayerId, Settings};

use crate::store::ScoringStore;

/// Id of the demo group.
pub const DEMO_GROUP_ID: &str = "biryani-baes";

/// Display name of the demo group.
pub const DEMO_GROUP_NAME: &str = "Biryani Baes SNIPES";

/// `(id, name, kills, victims, points)` for every demo player.
const DEMO_PLAYERS: [(&str, &str, u64, u64, i64); 11] = [
    ("anvita", "Anvita", 10, 9, 50),
    ("aashna", "Aashna", 9, 6, 150),
    ("hazel", "Hazel", 5, 10, -250),
    ("joel", "Joel", 1, 3, -100),
    ("luisa", "Luisa", 2, 8, -200),
    ("niki", "Niki", 14, 8, 250),
    ("patrick", "Patrick", 5, 9, -200),
    ("riya", "Riya", 21, 8, 650),
    ("sameeh", "Sameeh", 10, 12, -100),
    ("sara", "Sara", 1, 9, -450),
    ("shrina", "Shrina", 17, 7, 500),
];

/// Build the demo group.
pub fn demo_group() -> Group {
    let players = DEMO_PLAYERS
        .iter()
        .map(|&(id, name, kills, victims, points)| Player {
            id: PlayerId::from(id),
            name: name.to_owned(),
            kills,
            victims,
            points,
        })
        .collect();

    Group {
        id: GroupId::from(DEMO_GROUP_ID),
        name: DEMO_GROUP_NAME.to_owned(),
        players,
        settings: Settings::default(),
    }
}

/// Insert (or reset) the demo group in `store`.
pub fn seed_demo_group(store: &mut ScoringStore) {
    store.insert_group(demo_group());
    tracing::info!(group_id = DEMO_GROUP_ID, "Demo group seeded");
}
