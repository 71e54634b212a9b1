//! REST API endpoint handlers.
//!
//! Handlers extract path and body inputs, make one call into the
//! [`ScoringStore`](snipes_core::ScoringStore) held by [`AppState`], and
//! serialize the result. Store errors become 404s via [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/health` | Liveness and entity counts |
//! | `GET` | `/api/groups` | List all groups |
//! | `POST` | `/api/groups` | Create a group |
//! | `GET` | `/api/groups/:id` | Get one group |
//! | `DELETE` | `/api/groups/:id` | Delete a group and its snipes |
//! | `POST` | `/api/groups/:id/players` | Add a player |
//! | `DELETE` | `/api/groups/:id/players/:pid` | Remove a player |
//! | `PUT` | `/api/groups/:id/settings` | Update scoring settings |
//! | `GET` | `/api/groups/:id/snipes` | Snipes in recorded order |
//! | `GET` | `/api/groups/:id/history` | Snipes, newest first |
//! | `GET` | `/api/groups/:id/leaderboard` | Players ranked by points |
//! | `POST` | `/api/snipes` | Record a snipe |
//! | `DELETE` | `/api/snipes/:id` | Delete a snipe and reverse it |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use snipes_types::{GroupId, PlayerId, SettingsUpdate, Snipe, SnipeId};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body for `POST /api/groups` and `POST /api/groups/:id/players`.
#[derive(Debug, serde::Deserialize)]
pub struct NameRequest {
    /// Display name of the new group or player.
    pub name: String,
}

/// Body for `POST /api/snipes`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSnipeRequest {
    /// Group the snipe belongs to.
    pub group_id: GroupId,
    /// The scoring player.
    pub sniper_id: PlayerId,
    /// The sniped player.
    pub victim_id: PlayerId,
}

// ---------------------------------------------------------------------------
// GET /api/health
// ---------------------------------------------------------------------------

/// Report liveness plus group and snipe counts.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(serde_json::json!({
        "status": "ok",
        "groups": store.group_count(),
        "snipes": store.snipe_count(),
    }))
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

/// List all groups in creation order.
pub async fn list_groups(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(store.list_groups().to_vec())
}

/// Return a single group with its roster and settings.
pub async fn get_group(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let group = store.get_group(&GroupId::from(group_id))?;
    Ok(Json(group.clone()))
}

/// Create an empty group with default settings.
pub async fn create_group(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let group = state.store.write().await.create_group(request.name);
    info!(group_id = %group.id, name = %group.name, "Group created");
    Ok((StatusCode::CREATED, Json(group)))
}

/// Delete a group and purge its snipe history.
pub async fn delete_group(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .store
        .write()
        .await
        .delete_group(&GroupId::from(group_id))?;
    info!(group_id = %removed.id, "Group deleted");
    Ok(Json(serde_json::json!({ "message": "Group deleted successfully" })))
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// Add a zero-stat player to a group.
pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
    payload: Result<Json<NameRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let group_id = GroupId::from(group_id);
    let player = state
        .store
        .write()
        .await
        .add_player(&group_id, request.name)?;
    info!(%group_id, player_id = %player.id, name = %player.name, "Player added");
    Ok((StatusCode::CREATED, Json(player)))
}

/// Remove a player from a group. Unknown player ids succeed as a no-op.
pub async fn remove_player(
    State(state): State<Arc<AppState>>,
    Path((group_id, player_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let group_id = GroupId::from(group_id);
    let player_id = PlayerId::from(player_id);
    let removed = state
        .store
        .write()
        .await
        .remove_player(&group_id, &player_id)?;
    info!(%group_id, %player_id, removed = removed.is_some(), "Player removed");
    Ok(Json(serde_json::json!({ "message": "Player removed successfully" })))
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Update a group's scoring settings.
///
/// Missing, null and zero values keep the current setting.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(update) = payload?;
    let group_id = GroupId::from(group_id);
    let settings = state
        .store
        .write()
        .await
        .update_settings(&group_id, update)?;
    info!(
        %group_id,
        kill_points = settings.kill_points,
        death_points = settings.death_points,
        "Settings updated"
    );
    Ok(Json(settings))
}

// ---------------------------------------------------------------------------
// Snipes
// ---------------------------------------------------------------------------

/// Record a snipe between two players of a group.
pub async fn record_snipe(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RecordSnipeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let snipe = state.store.write().await.record_snipe(
        &request.group_id,
        &request.sniper_id,
        &request.victim_id,
    )?;
    info!(
        group_id = %snipe.group_id,
        snipe_id = %snipe.id,
        sniper = %snipe.sniper_name,
        victim = %snipe.victim_name,
        "Snipe recorded"
    );
    Ok((StatusCode::CREATED, Json(snipe)))
}

/// Delete a snipe, reversing its effect with the group's current settings.
pub async fn delete_snipe(
    State(state): State<Arc<AppState>>,
    Path(snipe_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .store
        .write()
        .await
        .delete_snipe(&SnipeId::from(snipe_id))?;
    info!(snipe_id = %removed.id, group_id = %removed.group_id, "Snipe deleted");
    Ok(Json(serde_json::json!({ "message": "Snipe deleted successfully" })))
}

/// List a group's snipes in recorded order. Unknown groups yield `[]`.
pub async fn list_snipes(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    let snipes: Vec<Snipe> = store
        .list_snipes(&GroupId::from(group_id))
        .into_iter()
        .cloned()
        .collect();
    Json(snipes)
}

/// List a group's snipes, newest first.
pub async fn history(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.read().await;
    let snipes: Vec<Snipe> = store
        .history(&GroupId::from(group_id))
        .into_iter()
        .cloned()
        .collect();
    Json(snipes)
}

/// Return a group's players ranked by points.
pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.read().await;
    let board = store.leaderboard(&GroupId::from(group_id))?;
    Ok(Json(board))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// 404 for any `/api` path without a route.
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound("Not found")
}
