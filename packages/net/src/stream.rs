//! Push-style execution surface.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::error::Error;
use crate::types::Response;

/// Observable-of-one returned by [`Client::stream`](crate::Client::stream).
///
/// Yields exactly one terminal item, a `Result<Response, Error>`, then
/// completes. Dropping the stream before its terminal item aborts the
/// underlying operation.
pub struct ResponseStream {
    rx: Option<oneshot::Receiver<Result<Response, Error>>>,
    task: Option<JoinHandle<()>>,
}

impl ResponseStream {
    pub(crate) fn new(
        rx: oneshot::Receiver<Result<Response, Error>>,
        task: Option<JoinHandle<()>>,
    ) -> Self {
        Self { rx: Some(rx), task }
    }
}

impl Stream for ResponseStream {
    type Item = Result<Response, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let Some(rx) = self.rx.as_mut() else {
            return Poll::Ready(None);
        };

        match Pin::new(rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => {
                self.rx = None;
                self.task = None;
                Poll::Ready(Some(outcome))
            }
            // Sender dropped without delivering: the operation was torn
            // down, complete without an item.
            Poll::Ready(Err(_)) => {
                self.rx = None;
                self.task = None;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.rx {
            Some(_) => (0, Some(1)),
            None => (0, Some(0)),
        }
    }
}

impl Drop for ResponseStream {
    fn drop(&mut self) {
        // Terminal item never consumed: abort the spawned operation.
        if self.rx.is_some() {
            if let Some(task) = &self.task {
                task.abort();
            }
        }
    }
}
