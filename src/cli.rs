mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use parser::{Cli, Commands, GitHubArgs};
pub(crate) use tracing::init as init_tracing;
