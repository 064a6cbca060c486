// src/lib.rs
//! Embeddable HTTP endpoint publishing a JSON snapshot of a running game
//! server, plus the top-block grid and bounds of any level.

pub mod config;
pub mod error;
pub mod game;
pub mod handlers;
pub mod models;
pub mod plugin;
pub mod router;
pub mod server;
pub mod snapshot;
pub mod storage;

pub use config::Config;
pub use error::{ListenerError, StatsError};
pub use game::{GameServer, Level, PlayerRecord};
pub use plugin::WebStatsPlugin;
pub use server::StatsServer;
