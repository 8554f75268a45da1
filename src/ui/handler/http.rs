//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{RoomDetailDto, RoomSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of active rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.room_query_usecase.list_rooms().await;

    // Domain Model から DTO への変換
    let room_summaries: Vec<RoomSummaryDto> = rooms
        .into_iter()
        .map(|(room_id, member_count)| RoomSummaryDto {
            id: room_id.into_string(),
            member_count,
        })
        .collect();

    Json(room_summaries)
}

/// Get room detail by ID
///
/// An absent room is observably equivalent to an empty one, so this never
/// returns 404 for a well-formed room id.
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    let room_id = RoomId::new(room_id).map_err(|_| StatusCode::BAD_REQUEST)?;

    let members = state.room_query_usecase.room_members(&room_id).await;

    let room_detail = RoomDetailDto {
        id: room_id.into_string(),
        member_count: members.len(),
        members: members.iter().map(|id| id.to_string()).collect(),
    };

    Ok(Json(room_detail))
}
