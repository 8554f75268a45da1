//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Summary of one active chat room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    /// Book identifier the room is keyed by
    pub id: String,
    /// Number of connections currently in the room
    pub member_count: usize,
}

/// Detail of one chat room
///
/// An unknown room is indistinguishable from an empty one, so this is
/// always returned with status 200 (possibly with zero members).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    /// Book identifier the room is keyed by
    pub id: String,
    /// Connection ids of the current members
    pub members: Vec<String>,
    /// Number of connections currently in the room
    pub member_count: usize,
}
