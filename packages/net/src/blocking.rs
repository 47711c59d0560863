//! Blocking surface over the async pipeline.
//!
//! The blocking client owns a current-thread Tokio runtime and drives the
//! async [`Client`](crate::Client) to completion on the calling thread, so
//! request construction and classification never diverge between the two
//! surfaces.

use tokio::runtime::Runtime;

use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::types::{RequestSpec, Response};
use crate::Settings;

/// Blocking HTTP client.
///
/// ```ignore
/// let client = gluon_net::blocking::Client::new()?;
/// let response = client.fetch("https://api.example.com/users/2")?;
/// ```
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a blocking client with default [`Settings`].
    pub fn new() -> Result<Self, Error> {
        Self::with_settings(Settings::default())
    }

    /// Create a blocking client with the given settings.
    pub fn with_settings(settings: Settings) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| Error::ServerInternal {
                message: error.to_string(),
            })?;
        let inner = crate::Client::with_settings(settings)?;

        Ok(Self { inner, runtime })
    }

    /// Perform a GET request, blocking until the terminal outcome.
    pub fn fetch<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Response, Error> {
        self.runtime.block_on(self.inner.fetch(endpoint))
    }

    /// Perform a request described by `spec`, blocking until the terminal
    /// outcome.
    pub fn fetch_with<E: Endpoint + ?Sized>(
        &self,
        endpoint: &E,
        spec: RequestSpec,
    ) -> Result<Response, Error> {
        self.runtime.block_on(self.inner.fetch_with(endpoint, spec))
    }

    /// See [`Client::cancel_all`](crate::Client::cancel_all).
    pub fn cancel_all(&self) {
        self.inner.cancel_all()
    }
}
