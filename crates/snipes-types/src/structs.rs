//! Core entity structs for the Snipes scorekeeping service.
//!
//! All structs serialize with camelCase field names, which is the JSON
//! shape the single-page client consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{GroupId, PlayerId, SnipeId};

/// Points awarded to the sniper when a group is created.
pub const DEFAULT_KILL_POINTS: i64 = 50;

/// Points applied to the victim when a group is created.
pub const DEFAULT_DEATH_POINTS: i64 = -50;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Per-group point deltas applied on every snipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Settings {
    /// Added to the sniper's points.
    #[ts(type = "number")]
    pub kill_points: i64,
    /// Added to the victim's points (normally negative).
    #[ts(type = "number")]
    pub death_points: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kill_points: DEFAULT_KILL_POINTS,
            death_points: DEFAULT_DEATH_POINTS,
        }
    }
}

/// Partial settings update as sent by the client.
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SettingsUpdate {
    /// New sniper delta, if provided.
    #[serde(default)]
    #[ts(type = "number | null")]
    pub kill_points: Option<i64>,
    /// New victim delta, if provided.
    #[serde(default)]
    #[ts(type = "number | null")]
    pub death_points: Option<i64>,
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A participant in a group, with running tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Unique player identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Number of snipes where this player was the sniper.
    #[ts(type = "number")]
    pub kills: u64,
    /// Number of snipes where this player was the victim.
    #[ts(type = "number")]
    pub victims: u64,
    /// Running sum of point deltas.
    #[ts(type = "number")]
    pub points: i64,
}

impl Player {
    /// Create a player with all counters at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            kills: 0,
            victims: 0,
            points: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// An isolated game instance with its own roster and scoring settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Group {
    /// Unique group identifier.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Roster, in the order players were added.
    pub players: Vec<Player>,
    /// Scoring settings currently in force.
    pub settings: Settings,
}

impl Group {
    /// Create an empty group with default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            players: Vec::new(),
            settings: Settings::default(),
        }
    }

    /// Look up a player in this group.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }
}

// ---------------------------------------------------------------------------
// Snipe
// ---------------------------------------------------------------------------

/// A recorded snipe event.
///
/// `sniper_name` and `victim_name` are copied at creation time and do not
/// follow later renames or removals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Snipe {
    /// Unique snipe identifier.
    pub id: SnipeId,
    /// The group the snipe was recorded in.
    pub group_id: GroupId,
    /// The player who scored.
    pub sniper_id: PlayerId,
    /// Sniper's name at the time of the snipe.
    pub sniper_name: String,
    /// The player who was sniped.
    pub victim_id: PlayerId,
    /// Victim's name at the time of the snipe.
    pub victim_name: String,
    /// When the snipe was recorded.
    #[serde(with = "crate::timestamp")]
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// A ranked row of a group's leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LeaderboardEntry {
    /// 1-based position, highest points first.
    #[ts(type = "number")]
    pub rank: u64,
    /// Player identifier.
    pub id: PlayerId,
    /// Player name.
    pub name: String,
    /// Kill count.
    #[ts(type = "number")]
    pub kills: u64,
    /// Victim count.
    #[ts(type = "number")]
    pub victims: u64,
    /// Current points.
    #[ts(type = "number")]
    pub points: i64,
}
