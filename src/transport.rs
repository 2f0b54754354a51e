pub mod bearer;
pub mod canned;

use url::Url;

use crate::Result;

/// Issues GET requests against the API and hands back the raw body.
///
/// Implementations must surface non-2xx answers as [`crate::Error::Api`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<Vec<u8>>;
}

#[async_trait::async_trait]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn get(&self, url: Url) -> Result<Vec<u8>> {
        <T as Transport>::get(self, url).await
    }
}
