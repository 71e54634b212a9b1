//! REST API server for the Snipes scorekeeping service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** under `/api` for groups, players, settings, snipes,
//!   history and the leaderboard
//! - **Static file serving** of the single-page client bundle, with an
//!   optional `index.html` fallback for client-side routes
//!
//! # Architecture
//!
//! Handlers are a thin mapping onto the [`ScoringStore`]: they extract
//! inputs, call one store operation under the store lock, and serialize
//! the result. Every "not found" store error becomes a 404 with a JSON
//! `{"error": ...}` body. The client refetches after every mutation, so
//! no response ever carries more than the entity it touched.
//!
//! [`ScoringStore`]: snipes_core::ScoringStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::{build_app, build_router};
pub use server::{ServerError, shutdown_signal, start_server};
pub use state::AppState;
