use axum::Json;

use super::responses::PingResponse;
use crate::errors::DiffServerError;

#[axum::debug_handler]
pub async fn ping() -> Result<Json<PingResponse>, DiffServerError> {
    Ok(Json(PingResponse {
        server_version: env!("CARGO_PKG_VERSION").to_owned(),
    }))
}
