// src/handlers/stats.rs
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use log::{debug, error};

use super::{read_state, AppState};
use crate::error::StatsError;
use crate::snapshot::SnapshotBuilder;

pub async fn server_stats(state: &web::Data<AppState>) -> Result<HttpResponse, StatsError> {
    let snapshot = read_state(state, |game| {
        Ok(SnapshotBuilder::new(game).build_server_snapshot())
    })
    .await?;

    debug!(
        "Building stats response with {} of {} players",
        snapshot.players.len(),
        snapshot.player_count
    );

    let body = serde_json::to_vec(&snapshot).map_err(|e| {
        error!("Failed to serialize server snapshot: {}", e);
        StatsError::from(e)
    })?;

    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}
