pub mod body;
pub mod tag;

use crate::config::{ActionContext, Inputs};
use crate::error::Error;
use crate::github::{GitHubClient, ReleaseRequest, ReleaseResult};

pub struct ReleaseCreator {
    client: GitHubClient,
    inputs: Inputs,
    context: ActionContext,
}

impl ReleaseCreator {
    pub fn new(client: GitHubClient, inputs: Inputs, context: ActionContext) -> Self {
        Self {
            client,
            inputs,
            context,
        }
    }

    /// Builds the request from the inputs and creates the release. Nothing is
    /// sent when any input fails to resolve.
    pub async fn create(&self) -> Result<ReleaseResult, Error> {
        let request = build_request(&self.inputs, &self.context).await?;

        tracing::info!(request = ?request, "create release");
        self.client.create_release(&request).await
    }
}

/// Resolves inputs, falling back to the workflow context, into one request.
pub async fn build_request(
    inputs: &Inputs,
    context: &ActionContext,
) -> Result<ReleaseRequest, Error> {
    let tag_name = tag::strip_ref_prefix(inputs.tag_name()?).to_string();
    let name = inputs
        .release_name
        .as_deref()
        .map(tag::strip_ref_prefix)
        .filter(|name| !name.is_empty())
        .unwrap_or(tag_name.as_str())
        .to_string();
    let draft = inputs.draft()?;
    let target_commitish = inputs.commitish.clone().or_else(|| context.sha.clone());

    let (owner, repo) = match (&inputs.owner, &inputs.repo) {
        (Some(owner), Some(repo)) => (owner.clone(), repo.clone()),
        (owner, repo) => {
            let (current_owner, current_repo) = context.repo()?;
            (
                owner.clone().unwrap_or_else(|| current_owner.to_string()),
                repo.clone().unwrap_or_else(|| current_repo.to_string()),
            )
        }
    };

    let prerelease = tag::resolve_prerelease(inputs.prerelease.as_deref(), &tag_name);
    let body = body::resolve_body(inputs.body.as_deref(), inputs.body_path.as_deref()).await?;

    Ok(ReleaseRequest {
        owner,
        repo,
        tag_name,
        name,
        body,
        draft,
        prerelease,
        target_commitish,
    })
}
