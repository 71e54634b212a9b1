//! Scoring core for the Snipes scorekeeping service.
//!
//! Holds the in-memory [`ScoringStore`] with every state-transition rule
//! for groups, players and snipes, plus the demo seed and the service
//! configuration.
//!
//! # Modules
//!
//! - [`store`] -- The [`ScoringStore`] and its operations
//! - [`leaderboard`] -- Ranking players by points
//! - [`seed`] -- The hardcoded demo group
//! - [`config`] -- YAML configuration with environment overrides
//! - [`error`] -- [`StoreError`]
//!
//! # Usage
//!
//! ```
//! use snipes_core::ScoringStore;
//!
//! let mut store = ScoringStore::new();
//! let group = store.create_group("g1");
//! let a = store.add_player(&group.id, "A").map(|p| p.id);
//! let b = store.add_player(&group.id, "B").map(|p| p.id);
//!
//! if let (Ok(a), Ok(b)) = (a, b) {
//!     let snipe = store.record_snipe(&group.id, &a, &b);
//!     assert!(snipe.is_ok());
//! }
//! assert_eq!(store.list_snipes(&group.id).len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod seed;
pub mod store;

// Re-export primary types at crate root.
pub use config::{AppConfig, ConfigError};
pub use error::StoreError;
pub use seed::seed_demo_group;
pub use store::ScoringStore;
