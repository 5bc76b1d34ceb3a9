//! Error types for startup and the status endpoints.
//!
//! `AppError` is what `main` and the HTTP handlers return. It maps onto a status
//! code and an `ErrorDto` body when it reaches axum.
//!
//! Voice errors never become an `AppError`: the connection controller logs them
//! and decides whether to schedule a rejoin.

pub mod config;
pub mod voice;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

#[derive(Error, Debug)]
pub enum AppError {
    /// Unusable environment configuration. Aborts startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Serenity failed to build a bot client or its gateway session ended with an error.
    ///
    /// Boxed, serenity's error type is large.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Socket error while binding or serving the status server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested resource does not exist; answered with 404 and the message.
    #[error("{0}")]
    NotFound(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        Self::DiscordErr(Box::new(err))
    }
}

/// # Returns
/// - 404 Not Found - `NotFound`, body `{"error": message}`
/// - 500 Internal Server Error - anything else, logged and hidden from the client
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::NotFound(message) = self {
            return error_response(StatusCode::NOT_FOUND, message);
        }

        InternalServerError(self).into_response()
    }
}

/// Logs the wrapped error and answers with an opaque 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorDto {
        error: message.into(),
    };

    (status, Json(body)).into_response()
}
