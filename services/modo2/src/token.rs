//! MODO2 token construction.
//!
//! A MODO2 token is a compact HS256 token prefixed with the `MODO2` scheme:
//!
//! ```text
//! MODO2 base64url(header_json) + "." + base64url(payload_json) + "." + base64url(signature)
//! ```
//!
//! where `signature = HMAC-SHA256(api_secret, header_segment + "." + payload_segment)`.
//! All segments use the url-safe alphabet without padding.
//!
//! JSON strings escape `<`, `>`, `&`, U+2028 and U+2029 as `\uXXXX`, the
//! way existing MODO2 clients encode them, so payload segments stay
//! byte-for-byte identical for any path.

use std::io;

use log::debug;
use serde::Serialize;
use serde_json::ser::Formatter;

use modo2auth_core::hash::{base64url_encode, base64url_hmac_sha256, hex_sha256};
use modo2auth_core::time::DateTime;
use modo2auth_core::Result;

use crate::constants::{MODO2_SCHEME, TOKEN_ALG, TOKEN_TYP};

#[derive(Debug, Serialize)]
struct TokenHeader<'a> {
    alg: &'a str,
    typ: &'a str,
}

/// Field order here is the key order on the wire and must stay
/// `iat, api_identifier, api_uri, body_hash`.
#[derive(Debug, Serialize)]
struct TokenPayload<'a> {
    iat: i64,
    api_identifier: &'a str,
    api_uri: &'a str,
    body_hash: &'a str,
}

/// Compact JSON formatter with HTML-safe string escaping.
#[derive(Debug, Default)]
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };

            writer.write_all(fragment[start..idx].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = idx + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(160);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    value.serialize(&mut ser)?;

    Ok(buf)
}

/// Build a signed MODO2 token, including the `MODO2 ` scheme prefix.
///
/// This is a pure function: the same inputs always produce the same token.
/// `identifier` and `secret` are not validated; a token built from bad
/// credentials is simply rejected by the server.
///
/// ## Errors
///
/// Returns a serialization error if the header or payload can't be encoded
/// to JSON.
pub fn build_token(
    api_uri: &str,
    body: &[u8],
    identifier: &str,
    secret: &[u8],
    now: DateTime,
) -> Result<String> {
    let header = make_header()?;
    let payload = make_payload(api_uri, identifier, body, now)?;
    let signature = make_signature(&header, &payload, secret);

    Ok(format!("{MODO2_SCHEME} {header}.{payload}.{signature}"))
}

/// Encode the fixed `{"alg":"HS256","typ":"JWT"}` header segment.
pub fn make_header() -> Result<String> {
    let header = TokenHeader {
        alg: TOKEN_ALG,
        typ: TOKEN_TYP,
    };

    Ok(base64url_encode(&to_json(&header)?))
}

/// Encode the payload segment, embedding the hash of `body`.
pub fn make_payload(
    api_uri: &str,
    api_identifier: &str,
    body: &[u8],
    now: DateTime,
) -> Result<String> {
    let body_hash = body_hash(body);
    let payload = TokenPayload {
        iat: now.timestamp(),
        api_identifier,
        api_uri,
        body_hash: &body_hash,
    };

    let json = to_json(&payload)?;
    debug!("token payload: {}", String::from_utf8_lossy(&json));

    Ok(base64url_encode(&json))
}

/// Sign `header.payload` with the api secret.
///
/// The MAC covers the already encoded segments, not the raw JSON.
pub fn make_signature(header: &str, payload: &str, secret: &[u8]) -> String {
    let mut content = String::with_capacity(header.len() + payload.len() + 1);
    content.push_str(header);
    content.push('.');
    content.push_str(payload);

    base64url_hmac_sha256(secret, content.as_bytes())
}

/// Lowercase hex SHA-256 of the body.
///
/// An empty body hashes like any other input, it's not special-cased.
pub fn body_hash(body: &[u8]) -> String {
    hex_sha256(body)
}
