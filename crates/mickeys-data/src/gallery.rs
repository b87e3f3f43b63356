//! Gallery backend client.

use crate::{FetchClient, FetchError};
use mickeys_commerce::catalog::{Gallery, GalleryImage};
use tracing::debug;

pub const DEFAULT_GALLERY_URL: &str = "https://mickeybackend.vercel.app/api/gallery";

/// One-shot fetch of the gallery image list.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    client: FetchClient,
    url: String,
}

impl GalleryClient {
    pub fn new(client: FetchClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Gallery, FetchError> {
        let response = self.client.get(&self.url).await?.error_for_status()?;
        let images: Vec<GalleryImage> = response.json()?;
        debug!(count = images.len(), "Fetched gallery");
        Ok(Gallery::new(images))
    }
}
