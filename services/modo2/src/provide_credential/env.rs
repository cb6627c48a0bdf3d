use crate::{constants::*, Credential};
use async_trait::async_trait;
use modo2auth_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads MODO2 credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `MODO_API_IDENTIFIER`: The MODO2 api identifier
/// - `MODO_API_SECRET`: The MODO2 api secret
///
/// Both must be set, otherwise nothing is loaded.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(MODO_API_IDENTIFIER), envs.get(MODO_API_SECRET)) {
            (Some(id), Some(secret)) => Ok(Some(Credential::new(id, secret))),
            _ => Ok(None),
        }
    }
}
