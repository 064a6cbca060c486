// src/snapshot.rs
//! Captures live server state into the immutable views served over HTTP.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::debug;

use crate::error::StatsError;
use crate::game::block::to_raw;
use crate::game::{GameServer, Level, PlayerRecord, Viewer, AIR};
use crate::models::{
    BoundsView, HeldBlockView, MapView, NameView, PlayerView, PositionView, ServerSnapshot,
    TopBlockGrid,
};

pub struct SnapshotBuilder<'a> {
    server: &'a dyn GameServer,
    viewer: Viewer,
}

impl<'a> SnapshotBuilder<'a> {
    /// Builder looking at the server as a guest would.
    pub fn new(server: &'a dyn GameServer) -> Self {
        Self {
            server,
            viewer: Viewer::GUEST,
        }
    }

    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = viewer;
        self
    }

    pub fn build_server_snapshot(&self) -> ServerSnapshot {
        self.build_server_snapshot_at(SystemTime::now())
    }

    pub fn build_server_snapshot_at(&self, now: SystemTime) -> ServerSnapshot {
        let online = self.server.online_players();
        let player_count = online.len();
        let players = self
            .viewer
            .visible(online)
            .iter()
            .map(|p| self.player_view(p, now))
            .collect();

        let started = self.server.start_time();
        let main = self.server.main_level();

        ServerSnapshot {
            player_count,
            started: unix_seconds(started),
            uptime: format_duration(elapsed(started, now)),
            players,
            main_map: self.map_view(main.as_ref(), now),
        }
    }

    pub fn build_top_block_grid(&self, name: &str) -> Result<TopBlockGrid, StatsError> {
        let level = self.resolve(name)?;
        Ok(top_blocks(level.as_ref()))
    }

    pub fn build_bounds(&self, name: &str) -> Result<BoundsView, StatsError> {
        let level = self.resolve(name)?;
        Ok(BoundsView::of(level.as_ref()))
    }

    fn resolve(&self, name: &str) -> Result<Arc<dyn Level>, StatsError> {
        self.server.find_level(name).ok_or_else(|| {
            debug!("Level {} does not exist", name);
            StatsError::MapNotFound(name.to_string())
        })
    }

    fn map_view(&self, level: &dyn Level, now: SystemTime) -> MapView {
        // The roster of a single map is published without the guest filter.
        let players = self
            .server
            .players_on(level.name())
            .iter()
            .map(|p| self.player_view(p, now))
            .collect();

        MapView {
            name: level.name().to_string(),
            players,
            bounds: BoundsView::of(level),
            spawn_pos: PositionView::from(level.spawn()),
        }
    }

    fn player_view(&self, player: &PlayerRecord, now: SystemTime) -> PlayerView {
        PlayerView {
            name: NameView {
                name: player.name.clone(),
                full_name: player.full_name.clone(),
                display_name: player.display_name.clone(),
                colored_display_name: player.colored_name.clone(),
                prefix: player.prefix.clone(),
                title: player.title.clone(),
                title_color: player.title_color.clone(),
            },
            afk: player.afk,
            last_action_time: unix_seconds(player.last_action),
            group: player.group_name.clone(),
            group_colored: player.group_colored_name.clone(),
            rank: player.rank.to_string(),
            client: player.client_name.clone(),
            skin: player.skin_name.clone(),
            join_time: unix_seconds(player.session_start),
            online_time: format_duration(elapsed(player.session_start, now)),
            map: player.level_name.clone(),
            coordinates: PositionView::from(player.position),
            held_block: HeldBlockView {
                name: self.server.block_name(player.held_block),
                id: player.held_block,
            },
        }
    }
}

/// Scans every column from the top down; the first non-air block wins.
pub fn top_blocks(level: &dyn Level) -> TopBlockGrid {
    let (width, length, height) = (level.width(), level.length(), level.height());
    let mut blocks = vec![AIR as u8; width as usize * length as usize];

    for x in 0..width {
        for z in 0..length {
            // extended ids that fold to air count as air
            let top = (0..height)
                .rev()
                .map(|y| to_raw(level.block(x, y, z)))
                .find(|&raw| raw != AIR as u8);
            if let Some(raw) = top {
                blocks[x as usize + width as usize * z as usize] = raw;
            }
        }
    }

    TopBlockGrid {
        width,
        length,
        blocks,
    }
}

/// `HH:MM:SS` in whole seconds. Hours keep counting past a day.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

pub fn unix_seconds(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string()
}

fn elapsed(since: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(since).unwrap_or_default()
}
