//! Background streaming of search results.
//!
//! [`ItemStream`] runs the pagination [`trampoline`](crate::rest::pagination::trampoline)
//! on a Tokio task and hands records to the consumer one at a time through a
//! capacity-1 channel. Records arrive in server order.
//!
//! The stream ends when the result set is exhausted, when a search fails
//! (including a walk cut short by an empty page), or when cancellation is
//! requested. Failures are never yielded as items; call
//! [`ItemStream::finish`] to learn why the producer stopped.
//!
//! # Cancellation
//!
//! Cancellation is cooperative and is observed only while the producer waits
//! to hand off a record. A page fetch already in flight completes, but no
//! further page is requested. At most one record that was already handed off
//! may still be received after cancelling.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures_util::StreamExt;
//! use ecwid_api::rest::{Filter, RestResource};
//! use ecwid_api::Product;
//!
//! let mut products = Product::stream(&client, &Filter::new());
//! let cancel = products.cancel_handle();
//!
//! while let Some(product) = products.next().await {
//!     if product.sku.as_deref() == Some("STOP") {
//!         cancel.cancel();
//!     }
//! }
//!
//! products.finish().await?;
//! ```

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::clients::RestClient;
use crate::rest::{pagination, Filter, ResourceError, RestResource};

/// Cloneable cancellation signal for an [`ItemStream`].
///
/// Cancelling is idempotent. Every clone observes the same signal.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Creates a handle that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// A lazy, finite stream of records produced by a background task.
///
/// Dropping the stream cancels the producer.
#[derive(Debug)]
pub struct ItemStream<T> {
    receiver: mpsc::Receiver<T>,
    cancel: CancelHandle,
    producer: Option<JoinHandle<Result<(), ResourceError>>>,
}

// Verify ItemStream and CancelHandle are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CancelHandle>();
    assert_send_sync::<ItemStream<crate::Product>>();
};

impl<T> ItemStream<T> {
    /// Receives the next record, or `None` once the stream has closed.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Requests cancellation of the producer.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns a handle that can cancel this stream from elsewhere.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Stops receiving and waits for the producer to exit.
    ///
    /// Records not yet received are discarded.
    ///
    /// # Errors
    ///
    /// Returns the search failure that ended the producer. Exhaustion and
    /// cancellation both yield `Ok(())`.
    ///
    /// # Panics
    ///
    /// Resumes the producer's panic, if it panicked.
    pub async fn finish(mut self) -> Result<(), ResourceError> {
        self.receiver.close();

        let Some(producer) = self.producer.take() else {
            return Ok(());
        };

        match producer.await {
            Ok(result) => result,
            Err(join_error) if join_error.is_panic() => {
                std::panic::resume_unwind(join_error.into_panic())
            }
            Err(_) => Ok(()),
        }
    }
}

impl<T> Stream for ItemStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

impl<T> Drop for ItemStream<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Starts a producer task streaming every `R` matching `filter`.
///
/// # Panics
///
/// Panics if called outside of a Tokio runtime.
#[must_use]
pub fn spawn<R: RestResource>(
    client: RestClient,
    filter: Filter,
    cancel: CancelHandle,
) -> ItemStream<R> {
    let (sender, receiver) = mpsc::channel::<R>(1);
    let cancel_rx = cancel.subscribe();

    tracing::debug!(resource = R::NAME, "starting stream producer");

    let producer = tokio::spawn(async move {
        let visit = move |_index: usize, item: R| {
            let sender = sender.clone();
            let mut cancel_rx = cancel_rx.clone();
            async move {
                tokio::select! {
                    biased;
                    () = cancelled(&mut cancel_rx) => Err(ResourceError::Cancelled),
                    sent = sender.send(item) => sent.map_err(|_| ResourceError::Cancelled),
                }
            }
        };

        match pagination::trampoline::<R, _, _, ResourceError>(&client, &filter, visit).await {
            Ok(()) => {
                tracing::debug!(resource = R::NAME, "stream exhausted");
                Ok(())
            }
            Err(ResourceError::Cancelled) => {
                tracing::debug!(resource = R::NAME, "stream cancelled");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(resource = R::NAME, error = %error, "stream producer stopped");
                Err(error)
            }
        }
    });

    ItemStream {
        receiver,
        cancel,
        producer: Some(producer),
    }
}

/// Resolves once `cancel` reads `true`.
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    loop {
        let is_cancelled = *cancel.borrow_and_update();
        if is_cancelled {
            return;
        }
        if cancel.changed().await.is_err() {
            // No sender left, so the signal can never fire.
            std::future::pending::<()>().await;
        }
    }
}
