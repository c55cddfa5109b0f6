use exact_diff::Granularity;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ComputeDiffRequest {
    pub old_content: String,
    pub new_content: String,

    /// Defaults to word granularity when omitted.
    #[serde(default)]
    pub granularity: Granularity,
}

#[derive(Debug, Deserialize)]
pub struct ComputeLineBasedDiffRequest {
    pub old_content: String,
    pub new_content: String,
}
