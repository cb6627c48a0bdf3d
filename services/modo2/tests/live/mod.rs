use std::env;

use bytes::Bytes;
use http::{Request, StatusCode};
use http_body_util::{Empty, Full};
use log::{debug, warn};
use modo2auth::{Credential, EnvCredentialProvider, RequestSigner};
use modo2auth_core::body::{read_body, SignedBody};
use modo2auth_core::{Context, OsEnv, Signer};

/// Signer against a real MODO2 server, configured from env.
///
/// Returns `None` unless `MODO2AUTH_TEST=on`.
fn init_signer() -> Option<(Signer<Credential>, String)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("MODO2AUTH_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let url = env::var("MODO2AUTH_URL").expect("env MODO2AUTH_URL must set");
    let signer = Signer::new(
        Context::new().with_env(OsEnv),
        EnvCredentialProvider::new(),
        RequestSigner::new(),
    );

    Some((signer, url))
}

async fn send<B>(req: Request<SignedBody<B>>) -> anyhow::Result<StatusCode>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let (parts, body) = req.into_parts();
    let body = read_body(body).await?;
    let req = reqwest::Request::try_from(Request::from_parts(parts, body))?;

    let resp = reqwest::Client::new().execute(req).await?;
    let status = resp.status();
    debug!("got response: {status}, {}", resp.text().await?);

    Ok(status)
}

#[tokio::test]
async fn test_live_get_public_key() -> anyhow::Result<()> {
    let Some((signer, url)) = init_signer() else {
        warn!("MODO2AUTH_TEST is not set, skipped");
        return Ok(());
    };

    let req = Request::get(format!("{url}/v2/vault/public_key")).body(Empty::<Bytes>::new())?;
    let req = signer.sign_request(req).await?;

    assert_eq!(send(req).await?, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_live_post_reports() -> anyhow::Result<()> {
    let Some((signer, url)) = init_signer() else {
        warn!("MODO2AUTH_TEST is not set, skipped");
        return Ok(());
    };

    let body = serde_json::json!({
        "start_date": "2020-05-01T00:00:00Z",
        "end_date": "2020-05-26T00:00:00Z",
    });
    let req = Request::post(format!("{url}/v2/reports"))
        .body(Full::new(Bytes::from(serde_json::to_vec(&body)?)))?;
    let req = signer.sign_request(req).await?;

    assert_eq!(send(req).await?, StatusCode::OK);
    Ok(())
}
