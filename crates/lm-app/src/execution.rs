//! Hops between the background and foreground execution contexts.
//!
//! Each hop submits work to the dispatcher and suspends the calling task on a
//! `oneshot` reply; the calling thread is never blocked.

use std::future::Future;

use lm_core::ports::DispatcherPort;
use lm_core::{LocalMediaError, LocalMediaResult};
use tokio::sync::oneshot;

/// Run `fut` on the background context and resume with its output.
pub async fn on_background<T, F>(dispatcher: &dyn DispatcherPort, fut: F) -> LocalMediaResult<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    dispatcher
        .dispatch_background(Box::pin(async move {
            // Receiver gone means the caller stopped waiting.
            let _ = tx.send(fut.await);
        }))
        .map_err(|err| LocalMediaError::Dispatch(err.to_string()))?;

    rx.await.map_err(|_| {
        LocalMediaError::Dispatch("background task dropped before completing".to_string())
    })
}

/// Run `f` on the foreground context and resume with its output.
pub async fn on_foreground<T, F>(dispatcher: &dyn DispatcherPort, f: F) -> LocalMediaResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    dispatcher
        .dispatch_foreground(Box::new(move || {
            let _ = tx.send(f());
        }))
        .map_err(|err| LocalMediaError::Dispatch(err.to_string()))?;

    rx.await.map_err(|_| {
        LocalMediaError::Dispatch("foreground task dropped before completing".to_string())
    })
}
