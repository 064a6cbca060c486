// src/plugin.rs
use log::info;
use std::sync::Arc;

use crate::config::Config;
use crate::error::ListenerError;
use crate::game::GameServer;
use crate::server::StatsServer;

/// The integration point for the hosting game server: `load` on plugin load,
/// `unload` on plugin unload.
pub struct WebStatsPlugin {
    server: StatsServer,
}

impl WebStatsPlugin {
    pub fn new(config: Config, game: Arc<dyn GameServer>) -> Self {
        Self {
            server: StatsServer::new(config, game),
        }
    }

    pub fn name(&self) -> &str {
        &self.server.config().plugin_name
    }

    pub fn version(&self) -> &str {
        &self.server.config().plugin_version
    }

    pub fn server(&self) -> &StatsServer {
        &self.server
    }

    pub fn load(&mut self, startup: bool) -> Result<(), ListenerError> {
        self.server.start()?;
        info!(
            "{} {} loaded{}.",
            self.name(),
            self.version(),
            if startup { " at startup" } else { "" }
        );
        Ok(())
    }

    pub fn unload(&mut self, shutdown: bool) -> Result<(), ListenerError> {
        self.server.stop()?;
        info!(
            "{} {} unloaded{}.",
            self.name(),
            self.version(),
            if shutdown { " at shutdown" } else { "" }
        );
        Ok(())
    }
}
