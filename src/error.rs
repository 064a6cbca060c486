// src/error.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;
use std::io;

/// Request-scoped failures. Every variant still produces a complete JSON response.
#[derive(Debug)]
pub enum StatsError {
    MapNotFound(String),
    UnknownPage(String),
    Serialization(serde_json::Error),
    Internal(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapNotFound(name) => write!(f, "Map does not exist: {}", name),
            Self::UnknownPage(path) => write!(f, "Unknown page: {}", path),
            Self::Serialization(e) => write!(f, "Failed to serialize response: {}", e),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for StatsError {}

impl From<serde_json::Error> for StatsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl StatsError {
    /// Message placed in the `Error` field of the body.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MapNotFound(_) => "Map does not exist.",
            Self::UnknownPage(_) => "Unknown page.",
            Self::Serialization(_) | Self::Internal(_) => "Internal server error.",
        }
    }
}

impl ResponseError for StatsError {
    fn status_code(&self) -> StatusCode {
        match self {
            // reported in the body, not the status
            Self::MapNotFound(_) => StatusCode::OK,
            Self::UnknownPage(_) => StatusCode::NOT_FOUND,
            Self::Serialization(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "Error": self.public_message() }))
    }
}

/// Failures while acquiring or running the listener.
#[derive(Debug)]
pub enum ListenerError {
    Bind(io::Error),
    Spawn(io::Error),
    Stopped(String),
}

impl fmt::Display for ListenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(e) => write!(f, "Failed to bind listener: {}", e),
            Self::Spawn(e) => write!(f, "Failed to spawn listener thread: {}", e),
            Self::Stopped(msg) => write!(f, "Listener stopped abnormally: {}", msg),
        }
    }
}

impl std::error::Error for ListenerError {}
