// src/handlers/level.rs
use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use log::{debug, error};

use super::{read_state, AppState};
use crate::error::StatsError;
use crate::snapshot::SnapshotBuilder;

/// Raw top-block grid of a level as a file download.
pub async fn top_blocks(state: &web::Data<AppState>, name: String) -> Result<HttpResponse, StatsError> {
    let lookup = name.clone();
    let grid = read_state(state, move |game| {
        SnapshotBuilder::new(game).build_top_block_grid(&lookup)
    })
    .await?;

    debug!("Sending {}x{} top-block grid of {}", grid.width, grid.length, name);

    let disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(format!("{}_map.dat", name))],
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::octet_stream())
        .insert_header(disposition)
        .body(grid.into_bytes()))
}

pub async fn bounds(state: &web::Data<AppState>, name: String) -> Result<HttpResponse, StatsError> {
    let bounds = read_state(state, move |game| SnapshotBuilder::new(game).build_bounds(&name)).await?;

    let body = serde_json::to_vec(&bounds).map_err(|e| {
        error!("Failed to serialize bounds: {}", e);
        StatsError::from(e)
    })?;

    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}
