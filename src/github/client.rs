use super::types::{ReleaseRequest, ReleaseResult};
use crate::config::GithubConfig;
use crate::error::Error;
use octocrab::Octocrab;

pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    pub fn new(config: &GithubConfig) -> Result<Self, Error> {
        let token = config.token.clone().ok_or(Error::MissingToken)?;
        let client = Octocrab::builder()
            .personal_token(token)
            .base_uri(config.api_url.as_str())?
            .build()?;
        Ok(Self { client })
    }

    pub async fn create_release(&self, request: &ReleaseRequest) -> Result<ReleaseResult, Error> {
        let route = format!("/repos/{}/{}/releases", request.owner, request.repo);
        let release: ReleaseResult = self.client.post(route, Some(request)).await?;

        tracing::debug!(id = release.id, "release created");
        Ok(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn request() -> ReleaseRequest {
        ReleaseRequest {
            owner: "octo-org".to_string(),
            repo: "hello-world".to_string(),
            tag_name: "v1.0.0".to_string(),
            name: "v1.0.0".to_string(),
            body: None,
            draft: None,
            prerelease: false,
            target_commitish: Some("ffac537e6cbbf934b08745a378932722df287a53".to_string()),
        }
    }

    fn client(url: String) -> GitHubClient {
        GitHubClient::new(&GithubConfig {
            token: Some("test_token".to_string()),
            api_url: url,
        })
        .unwrap()
    }

    #[test]
    fn new_requires_a_token() {
        let result = GitHubClient::new(&GithubConfig::default());

        assert!(matches!(result, Err(Error::MissingToken)));
    }

    #[tokio::test]
    async fn create_release_posts_the_payload() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/repos/octo-org/hello-world/releases")
            .match_body(Matcher::Json(json!({
                "tag_name": "v1.0.0",
                "name": "v1.0.0",
                "prerelease": false,
                "target_commitish": "ffac537e6cbbf934b08745a378932722df287a53"
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": 1,
                    "html_url": "https://github.com/octo-org/hello-world/releases/v1.0.0",
                    "upload_url": "https://uploads.github.com/repos/octo-org/hello-world/releases/1/assets{?name,label}",
                    "tag_name": "v1.0.0"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let release = client(server.url()).create_release(&request()).await?;

        mock.assert_async().await;
        assert_eq!(
            release,
            ReleaseResult {
                id: 1,
                html_url: "https://github.com/octo-org/hello-world/releases/v1.0.0".to_string(),
                upload_url: "https://uploads.github.com/repos/octo-org/hello-world/releases/1/assets{?name,label}"
                    .to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_release_forwards_the_api_message() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/repos/octo-org/hello-world/releases")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "message": "Bad credentials",
                    "documentation_url": "https://docs.github.com/rest"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let err = client(server.url())
            .create_release(&request())
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.to_string(), "Bad credentials");

        Ok(())
    }
}
