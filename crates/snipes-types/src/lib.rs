//! Shared type definitions for the Snipes scorekeeping service.
//!
//! This crate is the single source of truth for the entities exchanged
//! between the store, the HTTP layer and the single-page client. Types
//! flow to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for group, player and snipe ids
//! - [`structs`] -- Entity structs (groups, players, settings, snipes)

pub mod ids;
pub mod structs;
mod timestamp;

// Re-export all public types at crate root for convenience.
pub use ids::{GroupId, PlayerId, SnipeId};
pub use structs::{
    DEFAULT_DEATH_POINTS, DEFAULT_KILL_POINTS, Group, LeaderboardEntry, Player, Settings,
    SettingsUpdate, Snipe,
};
