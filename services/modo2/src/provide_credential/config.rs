use async_trait::async_trait;
use modo2auth_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider will load credential from config.
///
/// Fields left unset in the config are filled from the environment.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new provider via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        if let (Some(id), Some(secret)) = (&config.api_identifier, &config.api_secret) {
            return Ok(Some(Credential::new(id, secret)));
        }

        Ok(None)
    }
}
