//! Callable invocation form.
//!
//! A [`UnaryCallable`] dispatches a request without waiting for it: the call
//! starts running on the tokio runtime immediately and the caller receives an
//! [`ApiFuture`] to resolve whenever it is ready. Any independent work may
//! run between dispatch and resolution.
//!
//! ```rust,ignore
//! let future = client.get_kiosk_callable().future_call(request);
//! // ... other work ...
//! let kiosk = future.await?;
//! ```

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::client::DisplayClient;
use crate::error::KioskError;
use crate::rpc::Rpc;

/// A handle for invoking one RPC in the callable form.
pub struct UnaryCallable<M: Rpc> {
    client: DisplayClient,
    _rpc: PhantomData<fn() -> M>,
}

impl<M: Rpc> UnaryCallable<M> {
    pub(crate) fn new(client: DisplayClient) -> Self {
        Self {
            client,
            _rpc: PhantomData,
        }
    }

    /// Dispatches the call and returns a future for its result.
    ///
    /// The request is sent on a spawned task, so this must be called from
    /// within a tokio runtime.
    pub fn future_call(&self, request: M::Request) -> ApiFuture<M::Response> {
        debug!(rpc = M::NAME, "dispatching callable");
        let client = self.client.clone();
        let handle = tokio::spawn(async move { client.invoke::<M>(request).await });
        ApiFuture {
            handle,
            rpc: M::NAME,
        }
    }

    /// Dispatches the call and waits for its result.
    pub async fn call(&self, request: M::Request) -> Result<M::Response, KioskError> {
        self.future_call(request).await
    }
}

impl<M: Rpc> Clone for UnaryCallable<M> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

/// The pending result of a dispatched call.
///
/// Resolves exactly once, either by `.await` or [`ApiFuture::get`].
/// Dropping an `ApiFuture` does not cancel the call; use
/// [`ApiFuture::cancel`] for that.
#[must_use = "an ApiFuture does nothing unless awaited or cancelled"]
pub struct ApiFuture<T> {
    handle: JoinHandle<Result<T, KioskError>>,
    rpc: &'static str,
}

impl<T> ApiFuture<T> {
    /// Waits for the call to finish.
    pub async fn get(self) -> Result<T, KioskError> {
        self.await
    }

    /// Aborts the in-flight call. Awaiting afterwards yields
    /// [`KioskError::Cancelled`] unless the call had already completed.
    pub fn cancel(&self) {
        debug!(rpc = self.rpc, "cancelling callable");
        self.handle.abort();
    }

    /// Returns `true` once the call has completed or was cancelled.
    pub fn is_done(&self) -> bool {
        self.handle.is_finished()
    }

    /// RPC name of the dispatched call.
    pub fn rpc(&self) -> &'static str {
        self.rpc
    }
}

impl<T> Future for ApiFuture<T> {
    type Output = Result<T, KioskError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let rpc = self.rpc;
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(e)) if e.is_cancelled() => Poll::Ready(Err(KioskError::Cancelled { rpc })),
            Poll::Ready(Err(e)) => Poll::Ready(Err(KioskError::TaskFailed {
                rpc,
                message: e.to_string(),
            })),
        }
    }
}
