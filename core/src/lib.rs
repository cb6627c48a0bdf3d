//! Core components for signing MODO2 API requests.
//!
//! This crate provides the service-agnostic plumbing of the modo2auth
//! workspace: credential loading, body draining, and the orchestration that
//! runs a request signer over an outgoing request.
//!
//! ## Overview
//!
//! - **Context**: holds the [`Env`] implementation credential providers read from
//! - **Traits**: [`ProvideCredential`] loads credentials, [`SignRequest`] signs a request
//! - **Signer**: loads the credential on every call, drains the body when the
//!   request signer covers it, runs the request signer, and restores the body
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use bytes::Bytes;
//! use modo2auth_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-key".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _: &Context,
//!         _req: &mut http::request::Parts,
//!         _body: &Bytes,
//!         _cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         todo!()
//!     }
//! }
//!
//! # async fn example() -> anyhow::Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MySigner);
//!
//! let req = http::Request::post("https://example.com/test")
//!     .body(http_body_util::Full::new(Bytes::from_static(b"{}")))?;
//! let req = signer.sign_request(req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: hashing and encoding helpers
//! - [`time`]: signing time helpers
//! - [`utils`]: general utilities including data redaction
//! - [`body`]: draining and restoring request bodies

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod body;
pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
