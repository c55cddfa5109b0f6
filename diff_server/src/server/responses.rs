use exact_diff::Change;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DiffResponse {
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    pub server_version: String,
}
