//! Draining and restoring request bodies.
//!
//! Signers that cover the body need all of its bytes before the request goes
//! out. [`read_body`] drains any [`http_body::Body`] into memory and
//! [`restore_body`] wraps those bytes back into a body that yields them again.

use bytes::Bytes;
use http_body::Body;
use http_body_util::{BodyExt, Either, Full};

use crate::{Error, Result};

/// Body of a signed request.
///
/// `Left` holds the drained bytes restored into a fresh body, `Right` the
/// original stream when the signer did not need to read it.
pub type SignedBody<B> = Either<Full<Bytes>, B>;

/// Read the whole body into memory.
///
/// Returns a [`crate::ErrorKind::BodyRead`] error if any frame fails.
pub async fn read_body<B>(body: B) -> Result<Bytes>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match body.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) => {
            let err: Box<dyn std::error::Error + Send + Sync> = err.into();
            Err(Error::body_read(format!("failed to read request body: {err}"))
                .with_source(anyhow::anyhow!(err)))
        }
    }
}

/// Wrap drained bytes into a fresh body.
///
/// [`Full`] yields its bytes exactly once. Keep a clone of the [`Bytes`]
/// (which is reference counted) when the content must be read more than once.
pub fn restore_body(bs: Bytes) -> Full<Bytes> {
    Full::new(bs)
}
