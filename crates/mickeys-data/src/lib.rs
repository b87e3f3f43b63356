//! HTTP clients for Mickey's external collaborators.
//!
//! - [`ScriptEndpoint`] sends validated forms to the form-processing script
//!   and reads back its JSONP receipt.
//! - [`GalleryClient`] fetches the photo gallery.
//!
//! Both sit on a [`FetchClient`], a thin reqwest wrapper with a user agent
//! and a request timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use mickeys_commerce::forms::OrderRequest;
//! use mickeys_data::{FetchClient, FormSubmitter, ScriptEndpoint, DEFAULT_SCRIPT_URL};
//!
//! # async fn run(order: OrderRequest) -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = ScriptEndpoint::new(FetchClient::new()?, DEFAULT_SCRIPT_URL)?;
//! endpoint.submit(&order).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod gallery;
mod response;
mod script;

pub use error::{FetchError, SubmitError};
pub use gallery::{GalleryClient, DEFAULT_GALLERY_URL};
pub use response::Response;
pub use script::{
    parse_receipt, DryRunSubmitter, FormSubmitter, ScriptEndpoint, Submission, SubmissionReceipt,
    CALLBACK_NAME, DEFAULT_SCRIPT_URL,
};

use std::time::Duration;
use tracing::debug;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
}

impl FetchClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mickeys/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { inner })
    }

    /// Send a GET request and read the whole response.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(%url, "GET");
        let response = self.inner.get(url).send().await?;
        Response::read(response).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FetchClient, FetchError, FormSubmitter, GalleryClient, ScriptEndpoint, SubmitError,
        Submission,
    };
}
