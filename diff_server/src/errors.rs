use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffServerError {
    #[error("Initialisation error: {0}")]
    InitError(#[source] anyhow::Error),

    #[error("Server error: {0:?}")]
    ServerError(#[source] anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(#[source] anyhow::Error),
}

impl DiffServerError {
    pub fn serialize(&self) -> SerializedError {
        match self {
            Self::InitError(error) | Self::ServerError(error) | Self::NotFound(error) => {
                error.into()
            }
        }
    }
}

impl IntoResponse for DiffServerError {
    fn into_response(self) -> Response {
        let body = Json(self.serialize());

        match self {
            Self::InitError(_) | Self::ServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, body).into_response(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SerializedError {
    pub message: String,
    pub causes: Vec<String>,
}

impl From<&anyhow::Error> for SerializedError {
    fn from(error: &anyhow::Error) -> SerializedError {
        let mut causes = vec![];
        let mut current_error = error.source();
        while let Some(error) = current_error {
            causes.push(error.to_string());
            current_error = error.source();
        }

        SerializedError {
            message: error.to_string(),
            causes,
        }
    }
}

pub const fn init_error(error: anyhow::Error) -> DiffServerError {
    DiffServerError::InitError(error)
}

pub fn server_error(error: anyhow::Error) -> DiffServerError {
    error!("Server error: {error:?}");
    DiffServerError::ServerError(error)
}

pub fn not_found_error(error: anyhow::Error) -> DiffServerError {
    info!("Not found error: {error:?}");
    DiffServerError::NotFound(error)
}
