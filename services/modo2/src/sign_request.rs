//! MODO2 request signer.
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use http::Method;
use log::debug;

use modo2auth_core::time::now;
use modo2auth_core::time::DateTime;
use modo2auth_core::{Context, Error, Result, SignRequest};

use super::constants::*;
use super::credential::Credential;
use super::token::build_token;

/// RequestSigner that implements MODO2 Authorization.
///
/// The signer writes two headers:
///
/// - `Authorization: MODO2 <header>.<payload>.<signature>`
/// - `Content-Type: application/json`, which callers may override afterwards
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for reproducible signing, e.g. in tests.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn reads_body(&self, parts: &http::request::Parts) -> bool {
        covers_body(&parts.method)
    }

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        body: &Bytes,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let now = self.time.unwrap_or_else(now);

        let api_uri = parts.uri.path();
        let body = signable_body(&parts.method, body);
        debug!(
            "signing {} {api_uri} with {} body bytes",
            parts.method,
            body.len()
        );

        let token = build_token(
            api_uri,
            body,
            &cred.api_identifier,
            cred.api_secret.as_bytes(),
            now,
        )?;

        parts.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = token.parse()?;
            value.set_sensitive(true);

            value
        });
        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));

        Ok(())
    }
}

/// `GET` requests carry no body semantics and always sign the empty body.
fn covers_body(method: &Method) -> bool {
    *method != Method::GET
}

/// Bytes covered by the token.
fn signable_body<'a>(method: &Method, body: &'a [u8]) -> &'a [u8] {
    if covers_body(method) {
        body
    } else {
        &[]
    }
}
