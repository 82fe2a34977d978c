use anyhow::Result;
use secrecy::ExposeSecret;

use crate::utils::PipeMap;

use super::GitHubArgs;

impl GitHubArgs {
    /// Build the API client. Without a token, requests are unauthenticated,
    /// which the GraphQL comment listing rejects.
    pub(crate) fn try_into_octocrab(&mut self) -> Result<octocrab::Octocrab> {
        let token = self.token.take();
        if token.is_none() {
            tracing::warn!("No GitHub token given, comment listing will be rejected");
        }
        Ok(octocrab::Octocrab::builder()
            .try_pipe_map(self.api_url.as_deref(), |builder, api_url| {
                builder.base_uri(api_url)
            })?
            // https://github.com/XAMPPRocky/octocrab/issues/594
            .pipe_map(token, |builder, token| {
                builder.personal_token(token.expose_secret().to_owned())
            })
            .build()?)
    }
}
