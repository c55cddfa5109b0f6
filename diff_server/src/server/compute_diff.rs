use anyhow::Context as _;
use axum::Json;
use exact_diff::compute_exact_diff;

use super::{requests::ComputeDiffRequest, responses::DiffResponse};
use crate::errors::{DiffServerError, server_error};

/// The engine itself is total, so the only failure mode is the blocking task
/// being cancelled or panicking; both surface as an opaque server error with
/// the underlying message attached, never retried.
#[axum::debug_handler]
pub async fn compute_diff(
    Json(request): Json<ComputeDiffRequest>,
) -> Result<Json<DiffResponse>, DiffServerError> {
    let ComputeDiffRequest {
        old_content,
        new_content,
        granularity,
    } = request;

    let changes =
        tokio::task::spawn_blocking(move || compute_exact_diff(&old_content, &new_content, granularity))
            .await
            .context("Diff computation failed")
            .map_err(server_error)?;

    Ok(Json(DiffResponse { changes }))
}
