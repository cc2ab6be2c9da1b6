use serde::{Deserialize, Serialize};

/// Payload of `POST /repos/{owner}/{repo}/releases`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRequest {
    #[serde(skip)]
    pub owner: String,
    #[serde(skip)]
    pub repo: String,
    pub tag_name: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    pub prerelease: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
}

/// The part of the created release reported back to the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseResult {
    pub id: u64,
    pub html_url: String,
    pub upload_url: String,
}
