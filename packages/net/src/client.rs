//! The client: owns the transport, the concurrency limiter and the
//! cancellation channel, and funnels every surface through one execution
//! routine.

use std::sync::Arc;

use tokio::sync::{oneshot, watch, Semaphore};
use tracing::{debug, warn};

use crate::classify::classify;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::stream::ResponseStream;
use crate::types::{RequestSpec, Response};

/// Transport and concurrency configuration.
///
/// Consumed at client construction and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Upper bound on pooled connections per host. `None` keeps the
    /// transport library default.
    pub max_connections_per_host: Option<usize>,

    /// Upper bound on concurrently executing operations; further calls
    /// queue FIFO until a slot frees. `None` means unbounded.
    pub max_concurrent_operations: Option<usize>,
}

/// HTTP client over a shared connection pool.
///
/// One `Client` per logical configuration; share it by reference. All
/// methods take `&self` and are safe to call concurrently.
///
/// Two execution surfaces sit over the same pipeline: [`fetch`](Self::fetch)
/// suspends the calling task until the terminal outcome is ready, and
/// [`stream`](Self::stream) delivers the same outcome through a one-shot
/// [`ResponseStream`]. Every call performs exactly one network attempt.
pub struct Client {
    http: reqwest::Client,
    inflight: Option<Arc<Semaphore>>,
    cancel: watch::Sender<u64>,
}

impl Client {
    /// Create a client with default [`Settings`].
    pub fn new() -> Result<Self, Error> {
        Self::with_settings(Settings::default())
    }

    /// Create a client with the given settings.
    pub fn with_settings(settings: Settings) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(limit) = settings.max_connections_per_host {
            builder = builder.pool_max_idle_per_host(limit);
        }
        let http = builder.build().map_err(|error| Error::ServerInternal {
            message: error.to_string(),
        })?;

        let inflight = settings
            .max_concurrent_operations
            .map(|count| Arc::new(Semaphore::new(count.max(1))));
        let (cancel, _) = watch::channel(0u64);

        Ok(Self {
            http,
            inflight,
            cancel,
        })
    }

    /// Perform a GET request against an endpoint.
    pub async fn fetch<E: Endpoint + ?Sized>(&self, endpoint: &E) -> Result<Response, Error> {
        self.fetch_with(endpoint, RequestSpec::default()).await
    }

    /// Perform a request described by `spec` against an endpoint.
    pub async fn fetch_with<E: Endpoint + ?Sized>(
        &self,
        endpoint: &E,
        spec: RequestSpec,
    ) -> Result<Response, Error> {
        let request = spec.build(endpoint)?;
        execute(
            self.http.clone(),
            self.inflight.clone(),
            self.cancel.subscribe(),
            request,
        )
        .await
    }

    /// Push-style GET request. See [`stream_with`](Self::stream_with).
    pub fn stream<E: Endpoint + ?Sized>(&self, endpoint: &E) -> ResponseStream {
        self.stream_with(endpoint, RequestSpec::default())
    }

    /// Push-style variant of [`fetch_with`](Self::fetch_with).
    ///
    /// The request starts executing immediately on a spawned task; the
    /// returned stream yields the single terminal outcome, then completes.
    /// Must be called within a Tokio runtime.
    pub fn stream_with<E: Endpoint + ?Sized>(
        &self,
        endpoint: &E,
        spec: RequestSpec,
    ) -> ResponseStream {
        let (tx, rx) = oneshot::channel();

        match spec.build(endpoint) {
            Ok(request) => {
                let http = self.http.clone();
                let inflight = self.inflight.clone();
                let cancelled = self.cancel.subscribe();
                let task = tokio::spawn(async move {
                    let _ = tx.send(execute(http, inflight, cancelled, request).await);
                });
                ResponseStream::new(rx, Some(task))
            }
            Err(error) => {
                let _ = tx.send(Err(error));
                ResponseStream::new(rx, None)
            }
        }
    }

    /// Request cancellation of every queued or in-flight operation.
    ///
    /// Best-effort and non-blocking: pending operations resolve with
    /// [`Error::Cancelled`] at their next suspension point. Operations
    /// started after this call are unaffected. A no-op when nothing is in
    /// flight.
    pub fn cancel_all(&self) {
        debug!("cancelling in-flight operations");
        self.cancel.send_modify(|generation| *generation += 1);
    }
}

/// The single pipeline both surfaces funnel through: limiter permit,
/// one network round-trip, classification. Each await races the client-wide
/// cancellation signal.
async fn execute(
    http: reqwest::Client,
    inflight: Option<Arc<Semaphore>>,
    mut cancelled: watch::Receiver<u64>,
    request: reqwest::Request,
) -> Result<Response, Error> {
    let _permit = match inflight {
        Some(limiter) => tokio::select! {
            permit = limiter.acquire_owned() => Some(permit.map_err(|_| Error::Cancelled)?),
            _ = cancelled.changed() => return Err(Error::Cancelled),
        },
        None => None,
    };

    debug!(method = %request.method(), url = %request.url(), "dispatching request");

    let outcome = tokio::select! {
        outcome = http.execute(request) => outcome,
        _ = cancelled.changed() => return Err(Error::Cancelled),
    };

    let response = outcome.map_err(|error| {
        warn!(%error, "transport failure");
        Error::ServerInternal {
            message: error.to_string(),
        }
    })?;

    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(|error| Error::ServerInternal {
        message: error.to_string(),
    })?;

    classify(status_code, headers, body)
}
