use url::Url;

use crate::{auth::AccessToken, Error, Result};

/// Authorized HTTP transport holding a single access token for its lifetime.
#[derive(Debug, Clone)]
pub struct Bearer {
    client: reqwest::Client,
    token: AccessToken,
}

impl Bearer {
    pub fn new(client: reqwest::Client, token: AccessToken) -> Self {
        Self { client, token }
    }

    pub async fn authenticate(
        client: reqwest::Client,
        token_url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Self> {
        let token = crate::auth::authenticate(&client, token_url, client_id, client_secret).await?;
        tracing::debug!(expires_in = token.expires_in, "access token granted");
        Ok(Self::new(client, token))
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }
}

#[async_trait::async_trait]
impl super::Transport for Bearer {
    async fn get(&self, url: Url) -> Result<Vec<u8>> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token.access_token)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(Error::Api {
                status_code: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }
}
