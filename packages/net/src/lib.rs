//! # gluon-net
//!
//! A thin HTTP client: build a request from an [`Endpoint`] and a
//! [`RequestSpec`], execute it once, and get back either a [`Response`] or
//! a typed [`Error`] decided by the status code.
//!
//! ## Fetching
//!
//! ```ignore
//! use gluon_net::{Client, Method, RequestSpec};
//!
//! let client = Client::new()?;
//!
//! // Default spec is a bare GET.
//! let response = client.fetch("https://api.example.com/users/2").await?;
//!
//! // Full control over method, query, headers and body.
//! let spec = RequestSpec::new(Method::Post)
//!     .with_header("Content-Type", "application/json")
//!     .with_body(br#"{"name":"Charlie Parker"}"#.to_vec());
//! let created = client.fetch_with("https://api.example.com/users", spec).await?;
//! assert_eq!(created.status_code, 201);
//! ```
//!
//! ## Streaming
//!
//! [`Client::stream`] is a push-style variant of the same pipeline: it
//! yields exactly one terminal item, then completes.
//!
//! ```ignore
//! use futures::StreamExt;
//!
//! let mut outcome = client.stream("https://api.example.com/users/2");
//! while let Some(result) = outcome.next().await {
//!     let response = result?;
//!     println!("{}", response.status_code);
//! }
//! ```
//!
//! ## Concurrency and cancellation
//!
//! [`Settings::max_concurrent_operations`] bounds in-flight operations
//! (excess calls queue FIFO); [`Settings::max_connections_per_host`] bounds
//! the transport's per-host pooling underneath. [`Client::cancel_all`]
//! abandons everything queued or in flight; affected calls resolve with
//! [`Error::Cancelled`]. No retries anywhere: one call, one network
//! attempt, one terminal outcome.

pub mod endpoint;
pub mod error;
pub mod types;

mod classify;
mod client;
mod stream;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use endpoint::{Endpoint, QueryParameter};
pub use error::Error;
pub use stream::ResponseStream;
pub use types::{Method, RequestSpec, Response};

pub use client::{Client, Settings};
