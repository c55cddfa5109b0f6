use anyhow::Context as _;
use axum::Json;
use exact_diff::compute_line_based_exact_diff;

use super::{requests::ComputeLineBasedDiffRequest, responses::DiffResponse};
use crate::errors::{DiffServerError, server_error};

#[axum::debug_handler]
pub async fn compute_line_based_diff(
    Json(request): Json<ComputeLineBasedDiffRequest>,
) -> Result<Json<DiffResponse>, DiffServerError> {
    let ComputeLineBasedDiffRequest {
        old_content,
        new_content,
    } = request;

    let changes =
        tokio::task::spawn_blocking(move || compute_line_based_exact_diff(&old_content, &new_content))
            .await
            .context("Diff computation failed")
            .map_err(server_error)?;

    Ok(Json(DiffResponse { changes }))
}
