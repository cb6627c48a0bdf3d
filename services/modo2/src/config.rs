use std::fmt::{Debug, Formatter};

use super::constants::*;
use modo2auth_core::{utils::Redact, Context};

/// Config carries all the configuration for MODO2 credentials.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_identifier` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MODO_API_IDENTIFIER`]
    pub api_identifier: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`MODO_API_SECRET`]
    pub api_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_identifier
    pub fn with_api_identifier(mut self, api_identifier: impl Into<String>) -> Self {
        self.api_identifier = Some(api_identifier.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Fill unset fields from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(MODO_API_IDENTIFIER) {
            self.api_identifier.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(MODO_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_identifier", &Redact::from(&self.api_identifier))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}
