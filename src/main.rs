use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod github;
mod release;
mod workflow;

use config::{normalize, ActionContext, Config, GithubConfig, Inputs, DEFAULT_API_URL};
use error::Error;
use github::GitHubClient;
use release::ReleaseCreator;
use workflow::OutputWriter;

#[derive(Parser)]
#[command(name = "create-release")]
#[command(about = "Create a GitHub release from a workflow step")]
struct Cli {
    /// Tag to create the release for; a leading `refs/tags/` is removed
    #[arg(long, env = "INPUT_TAG_NAME")]
    tag_name: Option<String>,

    /// Release title (defaults to the tag name)
    #[arg(long, env = "INPUT_RELEASE_NAME")]
    release_name: Option<String>,

    /// Release notes
    #[arg(long, env = "INPUT_BODY")]
    body: Option<String>,

    /// File to read the release notes from; takes precedence over --body
    #[arg(long, env = "INPUT_BODY_PATH")]
    body_path: Option<String>,

    /// Create an unpublished release
    #[arg(long, env = "INPUT_DRAFT")]
    draft: Option<String>,

    /// `true` or `false`; any other value derives it from the tag
    #[arg(long, env = "INPUT_PRERELEASE")]
    prerelease: Option<String>,

    /// Commit or branch the tag is created from (defaults to GITHUB_SHA)
    #[arg(long, env = "INPUT_COMMITISH")]
    commitish: Option<String>,

    /// Repository owner (defaults to the owner in GITHUB_REPOSITORY)
    #[arg(long, env = "INPUT_OWNER")]
    owner: Option<String>,

    /// Repository name (defaults to the name in GITHUB_REPOSITORY)
    #[arg(long, env = "INPUT_REPO")]
    repo: Option<String>,

    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "GITHUB_REPOSITORY", hide = true)]
    repository: Option<String>,

    #[arg(long, env = "GITHUB_SHA", hide = true)]
    sha: Option<String>,

    /// File step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    output: Option<PathBuf>,

    #[arg(long, env = "RUNNER_DEBUG", hide = true)]
    runner_debug: Option<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            inputs: Inputs {
                tag_name: normalize(cli.tag_name),
                release_name: normalize(cli.release_name),
                draft: normalize(cli.draft),
                commitish: normalize(cli.commitish),
                owner: normalize(cli.owner),
                repo: normalize(cli.repo),
                prerelease: normalize(cli.prerelease),
                body: normalize(cli.body),
                body_path: normalize(cli.body_path).map(PathBuf::from),
            },
            context: ActionContext {
                repository: normalize(cli.repository),
                sha: normalize(cli.sha),
            },
            github: GithubConfig {
                token: normalize(cli.token),
                api_url: cli.api_url,
            },
            output_path: cli.output.filter(|path| !path.as_os_str().is_empty()),
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: Config) -> Result<(), Error> {
    let client = GitHubClient::new(&config.github)?;
    let creator = ReleaseCreator::new(client, config.inputs, config.context);

    let release = creator.create().await?;
    tracing::info!(id = release.id, url = %release.html_url, "release created");

    OutputWriter::new(config.output_path).set_release(&release)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.runner_debug.as_deref() == Some("1"));

    match run(cli.into()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "release step failed");
            workflow::set_failed(&mut std::io::stdout(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}
