// src/models/snapshot.rs
use serde::Serialize;

use super::level::MapView;
use super::player::PlayerView;

/// Point-in-time capture of the server, built fresh for every request.
///
/// `player_count` is the true number of online players while `players` only
/// lists the ones a guest may see, so the two can disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSnapshot {
    pub player_count: usize,
    /// Unix seconds.
    pub started: String,
    pub uptime: String,
    pub players: Vec<PlayerView>,
    pub main_map: MapView,
}
