// src/handlers/mod.rs
pub mod level;
pub mod stats;

use actix_web::{web, HttpRequest, HttpResponse};
use log::{error, info};
use std::sync::Arc;

use crate::error::StatsError;
use crate::game::GameServer;
use crate::router::Route;

/// Shared by every worker of the stats listener.
pub struct AppState {
    pub game: Arc<dyn GameServer>,
}

impl AppState {
    pub fn new(game: Arc<dyn GameServer>) -> Self {
        Self { game }
    }
}

/// Single entry point for every request, whatever the method or path.
pub async fn dispatch(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, StatsError> {
    match Route::classify(req.path()) {
        Route::Stats => stats::server_stats(&state).await,
        Route::Map(name) => level::top_blocks(&state, name).await,
        Route::Bounds(name) => level::bounds(&state, name).await,
        Route::Unknown(path) => {
            info!("Unknown page: {}", path);
            Err(StatsError::UnknownPage(path))
        }
    }
}

/// Runs a read of host state on the blocking pool. A panic inside the host's
/// accessors comes back as `StatsError::Internal` instead of killing the worker.
async fn read_state<T, F>(state: &web::Data<AppState>, job: F) -> Result<T, StatsError>
where
    T: Send + 'static,
    F: FnOnce(&dyn GameServer) -> Result<T, StatsError> + Send + 'static,
{
    let game = state.game.clone();
    web::block(move || job(game.as_ref()))
        .await
        .map_err(|e| {
            error!("Reading server state failed: {}", e);
            StatsError::Internal(e.to_string())
        })?
}
