// src/main.rs
use classic_web_stats::storage::memory::{MemoryLevel, MemoryServer};
use classic_web_stats::{Config, WebStatsPlugin};
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;
use std::time::SystemTime;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    // Stand-in host: a flat main level and nobody online.
    let game = Arc::new(MemoryServer::new(
        concat!("classic-web-stats ", env!("CARGO_PKG_VERSION")),
        SystemTime::now(),
        MemoryLevel::flat("main", 128, 64, 128),
    ));

    let mut plugin = WebStatsPlugin::new(config, game);
    if let Err(e) = plugin.load(true) {
        error!("Failed to load {}: {}", plugin.name(), e);
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    if let Err(e) = plugin.unload(true) {
        error!("Failed to unload {}: {}", plugin.name(), e);
    }
    Ok(())
}
