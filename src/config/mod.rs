pub mod types;

pub use types::{normalize, ActionContext, Config, GithubConfig, Inputs, DEFAULT_API_URL};
