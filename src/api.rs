use serde::de::DeserializeOwned;
use url::Url;

use crate::{config::Config, transport::Transport, Error, Result};

/// A [`Transport`] bound to an API base URL and locale.
#[derive(Debug)]
pub struct Api<T> {
    transport: T,
    base: String,
    locale: String,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            base: config.api_url.trim_end_matches('/').to_string(),
            locale: config.locale.clone(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Endpoint URL for `path`, already carrying the `locale` parameter.
    pub fn url(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base, path.trim_start_matches('/')))?;
        url.query_pairs_mut().append_pair("locale", &self.locale);
        Ok(url)
    }

    pub async fn get<D: DeserializeOwned>(&self, url: Url) -> Result<D> {
        let body = self.transport.get(url).await?;
        decode(&body)
    }
}

pub(crate) fn decode<D: DeserializeOwned>(body: &[u8]) -> Result<D> {
    let deserializer = &mut serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| Error::Decode {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
