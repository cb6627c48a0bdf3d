use crate::body::{read_body, restore_body, SignedBody};
use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use bytes::Bytes;
use http_body_util::Either;
use log::warn;
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Every signing call loads the credential through the provider and hands it
/// to the request signer. Nothing is kept between calls.
#[derive(Clone, Debug)]
pub struct Signer<C: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = C>>,
    signer: Arc<dyn SignRequest<Credential = C>>,
}

impl<C: SigningCredential> Signer<C> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = C>,
        signer: impl SignRequest<Credential = C>,
    ) -> Self {
        Self {
            ctx,

            provider: Arc::new(provider),
            signer: Arc::new(signer),
        }
    }

    /// Sign a request whose body is already held in memory.
    pub async fn sign(&self, req: &mut http::request::Parts, body: &Bytes) -> Result<()> {
        let credential = self.provider.provide_credential(&self.ctx).await?;
        if let Some(cred) = &credential {
            if !cred.is_valid() {
                warn!("loaded credential is incomplete, the server will likely reject this request");
            }
        }

        self.signer
            .sign_request(&self.ctx, req, body, credential.as_ref())
            .await
    }

    /// Sign a request, handing its body back unchanged.
    ///
    /// If the request signer covers the body, the stream is drained and the
    /// returned request carries the same bytes in a fresh body. Otherwise the
    /// stream is never polled and comes back as is. On error the request is
    /// dropped, so a failed attempt must not be retried with the original.
    pub async fn sign_request<B>(&self, req: http::Request<B>) -> Result<http::Request<SignedBody<B>>>
    where
        B: http_body::Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let (mut parts, body) = req.into_parts();

        if !self.signer.reads_body(&parts) {
            self.sign(&mut parts, &Bytes::new()).await?;
            return Ok(http::Request::from_parts(parts, Either::Right(body)));
        }

        let body = read_body(body).await?;
        self.sign(&mut parts, &body).await?;

        Ok(http::Request::from_parts(
            parts,
            Either::Left(restore_body(body)),
        ))
    }
}
