//! MODO2 signing implementation for modo2auth.
//!
//! This crate signs outgoing HTTP requests for MODO2 APIs. Every request gets
//! an `Authorization` header carrying a compact HS256 token:
//!
//! ```text
//! MODO2 <header>.<payload>.<signature>
//! ```
//!
//! The payload embeds the signing time, the api identifier, the request path
//! and the SHA-256 of the request body, so the server can verify who sent the
//! request and that neither path nor body was altered. No handshake is needed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bytes::Bytes;
//! use http_body_util::Full;
//! use modo2auth::{RequestSigner, StaticCredentialProvider};
//! use modo2auth_core::{Context, Signer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = StaticCredentialProvider::new("api_identifier", "api_secret");
//!     let signer = Signer::new(Context::new(), provider, RequestSigner::new());
//!
//!     let req = http::Request::post("https://api.example.com/v2/reports")
//!         .body(Full::new(Bytes::from_static(br#"{"start_date":"2020-05-01T00:00:00Z"}"#)))?;
//!
//!     // The body is drained for hashing and handed back unchanged.
//!     let req = signer.sign_request(req).await?;
//!     assert!(req.headers().contains_key(http::header::AUTHORIZATION));
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export MODO_API_IDENTIFIER=your-api-identifier
//! export MODO_API_SECRET=your-api-secret
//! ```
//!
//! Read through [`EnvCredentialProvider`] or [`DefaultCredentialProvider`]
//! with a context built on `modo2auth_core::OsEnv`.
//!
//! ### Configuration
//!
//! [`ConfigCredentialProvider`] takes a [`Config`]; unset fields fall back to
//! the environment variables above.
//!
//! ## Building tokens directly
//!
//! [`build_token`] is a pure function over the request path, body,
//! credentials and signing instant, for callers that don't go through
//! [`RequestSigner`].

mod constants;
pub use constants::{MODO_API_IDENTIFIER, MODO_API_SECRET};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod token;
pub use token::{body_hash, build_token, make_header, make_payload, make_signature};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
