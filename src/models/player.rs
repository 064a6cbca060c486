// src/models/player.rs
use serde::Serialize;

use super::level::PositionView;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NameView {
    pub name: String,
    pub full_name: String,
    pub display_name: String,
    pub colored_display_name: String,
    pub prefix: String,
    pub title: String,
    pub title_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeldBlockView {
    pub name: String,
    pub id: u16,
}

/// One online player as published by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerView {
    pub name: NameView,
    #[serde(rename = "AFK")]
    pub afk: bool,
    /// Unix seconds.
    pub last_action_time: String,
    pub group: String,
    pub group_colored: String,
    pub rank: String,
    pub client: String,
    pub skin: String,
    /// Unix seconds.
    pub join_time: String,
    /// `HH:MM:SS` since join.
    pub online_time: String,
    pub map: String,
    pub coordinates: PositionView,
    pub held_block: HeldBlockView,
}
