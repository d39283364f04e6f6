//! Error handling for the recipe API.
//!
//! Internal detail (database errors, timeouts) is logged with `tracing` and
//! never sent to clients; responses carry a sanitised message plus a
//! `retryable` flag so callers know whether trying again can help.

use std::fmt;
use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// API error type with automatic logging and sanitised responses.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - the requested recipe or cookbook has no record.
    NotFound {
        /// Resource type (e.g. "Recipe", "Cookbook")
        resource: String,
        /// Identifier that wasn't found
        id: Option<String>,
    },

    /// 503 Service Unavailable - the entity store refused or dropped the
    /// connection. Retryable; the service itself does not retry.
    Unavailable {
        /// Internal error (logged, not sent to the client)
        internal: String,
    },

    /// 503 Service Unavailable - the request exceeded its time budget.
    /// Retryable.
    Timeout {
        /// Configured budget that was exceeded
        budget: Duration,
    },

    /// 500 Internal Server Error - any other store failure (details logged,
    /// not exposed).
    Database {
        /// Internal error (logged, not sent to the client)
        internal: DbErr,
    },
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    #[must_use]
    pub fn timeout(budget: Duration) -> Self {
        Self::Timeout { budget }
    }

    #[must_use]
    pub fn database(err: DbErr) -> Self {
        Self::Database { internal: err }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } | Self::Timeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether a retry of the same request can reasonably succeed.
    fn retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }

    /// The sanitised message sent to the client.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => match id {
                Some(id) => format!("{resource} with ID '{id}' not found"),
                None => format!("{resource} not found"),
            },
            Self::Unavailable { .. } => "The recipe store is unavailable".to_string(),
            Self::Timeout { .. } => "The request took too long to complete".to_string(),
            Self::Database { .. } => "A database error occurred".to_string(),
        }
    }

    /// Log internal error details (not sent to the client).
    fn log_internal(&self) {
        match self {
            Self::Database { internal } => {
                tracing::error!(error = ?internal, "database error");
            }
            Self::Unavailable { internal } => {
                tracing::error!(details = %internal, "entity store unavailable");
            }
            Self::Timeout { budget } => {
                tracing::warn!(budget_ms = budget.as_millis(), "request exceeded time budget");
            }
            Self::NotFound { .. } => {
                tracing::debug!(error = %self.user_message(), "not found");
            }
        }
    }
}

/// Error response sent to clients (sanitised).
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    retryable: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
            retryable: self.retryable(),
        };
        (status, Json(response)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// Conversion rules:
/// - `DbErr::RecordNotFound` → 404
/// - connection and pool-acquire failures → 503, retryable
/// - everything else → 500, sanitised
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Resource");
                Self::NotFound {
                    resource: resource.to_string(),
                    id: None,
                }
            }
            DbErr::Conn(e) => Self::Unavailable {
                internal: e.to_string(),
            },
            DbErr::ConnectionAcquire(e) => Self::Unavailable {
                internal: e.to_string(),
            },
            _ => Self::Database { internal: err },
        }
    }
}
