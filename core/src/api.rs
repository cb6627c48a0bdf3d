use crate::{Context, Result};
use bytes::Bytes;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// A provider returns `Ok(None)` when its source simply has no credential, so
/// that a chain can move on to the next source.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Whether the body of this request is covered by the signature.
    ///
    /// When this returns `false` the signer leaves the body stream unread and
    /// passes an empty body to [`SignRequest::sign_request`].
    fn reads_body(&self, _req: &http::request::Parts) -> bool {
        true
    }

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` is the complete request body, already drained from the request,
    /// or empty if [`SignRequest::reads_body`] returned `false`. The signer
    /// restores the body untouched afterwards.
    ///
    /// ## Credential
    ///
    /// `credential` is `None` when no provider could load one. Implementations
    /// should return a credential error in that case.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &Bytes,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
