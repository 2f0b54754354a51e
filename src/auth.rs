use std::fmt;

use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::{Error, Result};

/// Bearer credential issued by the client-credentials grant.
///
/// `expires_in` is informational only: the token is never refreshed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Runs the OAuth2 client-credentials grant against `token_url`.
pub async fn authenticate(
    client: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<AccessToken> {
    tracing::debug!(token_url, "requesting access token");
    let body = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .header(ACCEPT, "*/*")
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .bytes()
        .await?;
    parse_token(&body)
}

// Error bodies are JSON without an `access_token`.
fn parse_token(body: &[u8]) -> Result<AccessToken> {
    let token = match serde_json::from_slice::<AccessToken>(body) {
        Ok(token) => Some(token),
        Err(e) => {
            tracing::warn!("couldn't decode token response: {e}");
            None
        }
    };
    match token {
        Some(token) if !token.access_token.is_empty() => Ok(token),
        _ => Err(Error::Auth(format!(
            "access token not set despite a successful request: {}",
            String::from_utf8_lossy(body)
        ))),
    }
}
