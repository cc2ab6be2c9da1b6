use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean { name: &'static str },

    #[error("context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'")]
    MissingRepository,

    #[error("GITHUB_TOKEN is not set")]
    MissingToken,

    #[error("Unable to read body file {}: {source}", path.display())]
    BodyFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rejection reported by the GitHub API, carrying its `message` verbatim.
    #[error("{message}")]
    Api { message: String },

    #[error(transparent)]
    Client(octocrab::Error),

    #[error("Unable to write output {name}: {reason}")]
    Output { name: String, reason: String },

    #[error("Unable to write outputs to {}", path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Error::Api {
                message: source.message,
            },
            other => Error::Client(other),
        }
    }
}
