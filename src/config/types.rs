use crate::error::Error;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Everything one invocation needs, resolved once from the CLI and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Inputs,
    pub context: ActionContext,
    pub github: GithubConfig,
    pub output_path: Option<PathBuf>,
}

/// Step inputs as supplied by the workflow. Values are trimmed and empty
/// values are stored as `None`.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub tag_name: Option<String>,
    pub release_name: Option<String>,
    pub draft: Option<String>,
    pub commitish: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub prerelease: Option<String>,
    pub body: Option<String>,
    pub body_path: Option<PathBuf>,
}

impl Inputs {
    pub fn tag_name(&self) -> Result<&str, Error> {
        self.tag_name
            .as_deref()
            .ok_or(Error::MissingInput("tag_name"))
    }

    pub fn draft(&self) -> Result<Option<bool>, Error> {
        self.draft
            .as_deref()
            .map(|value| parse_bool("draft", value))
            .transpose()
    }
}

/// Values describing the workflow run that triggered the step.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// `owner/repo` of the triggering repository.
    pub repository: Option<String>,
    pub sha: Option<String>,
}

impl ActionContext {
    pub fn repo(&self) -> Result<(&str, &str), Error> {
        self.repository
            .as_deref()
            .and_then(|repository| repository.split_once('/'))
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
            .ok_or(Error::MissingRepository)
    }
}

#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub token: Option<String>,
    pub api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Trims an input value, mapping blank values to `None`.
pub fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, Error> {
    match value {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(Error::InvalidBoolean { name }),
    }
}
