// src/game/mod.rs
//! Read-only view of the hosting game server.
//!
//! The host implements [`GameServer`] and [`Level`]; the stats endpoint only
//! ever reads through these traits and never holds locks of its own.

pub mod block;
pub mod permission;
pub mod position;

use std::sync::Arc;
use std::time::SystemTime;

pub use block::{BlockId, AIR};
pub use permission::{Permission, Viewer};
pub use position::{BlockCoords, Position};

/// Value copy of a live player, taken when the host is asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub full_name: String,
    pub display_name: String,
    pub colored_name: String,
    pub prefix: String,
    pub title: String,
    pub title_color: String,
    pub group_name: String,
    pub group_colored_name: String,
    pub rank: Permission,
    pub afk: bool,
    pub last_action: SystemTime,
    pub client_name: String,
    pub skin_name: String,
    pub session_start: SystemTime,
    pub level_name: String,
    pub position: Position,
    pub held_block: BlockId,
    /// Set while the player is hidden: the lowest rank that can still see them.
    pub hidden_rank: Option<Permission>,
}

impl PlayerRecord {
    /// A freshly joined, visible player with every display form set to `name`.
    pub fn new(name: &str, level_name: &str) -> Self {
        let now = SystemTime::now();
        Self {
            name: name.to_string(),
            full_name: name.to_string(),
            display_name: name.to_string(),
            colored_name: format!("&f{}", name),
            prefix: String::new(),
            title: String::new(),
            title_color: String::new(),
            group_name: "guest".to_string(),
            group_colored_name: "&7guest".to_string(),
            rank: Permission::GUEST,
            afk: false,
            last_action: now,
            client_name: "ClassiCube".to_string(),
            skin_name: name.to_string(),
            session_start: now,
            level_name: level_name.to_string(),
            position: Position::default(),
            held_block: AIR,
            hidden_rank: None,
        }
    }
}

/// A loaded world.
pub trait Level: Send + Sync {
    fn name(&self) -> &str;
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    fn length(&self) -> u16;
    fn spawn(&self) -> Position;

    /// Extended block id at the given coordinates, `AIR` when out of range.
    fn block(&self, x: u16, y: u16, z: u16) -> BlockId;
}

/// Everything the stats endpoint reads from the hosting server.
pub trait GameServer: Send + Sync {
    /// Every online player, hidden ones included.
    fn online_players(&self) -> Vec<PlayerRecord>;

    fn start_time(&self) -> SystemTime;

    /// Host software name and version, e.g. `MCGalaxy 1.9.5.0`.
    fn software_version(&self) -> String;

    fn main_level(&self) -> Arc<dyn Level>;

    /// Resolves a level by name, loading it if the host knows it but has it unloaded.
    fn find_level(&self, name: &str) -> Option<Arc<dyn Level>>;

    /// Roster of a single level. No visibility filter is applied here.
    fn players_on(&self, level: &str) -> Vec<PlayerRecord> {
        self.online_players()
            .into_iter()
            .filter(|p| p.level_name == level)
            .collect()
    }

    fn block_name(&self, block: BlockId) -> String {
        block::default_name(block)
    }
}
