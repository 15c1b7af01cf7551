//! Background and foreground execution contexts backed by tokio.
//!
//! Background work is spawned onto a tokio runtime and may run in parallel.
//! Foreground work goes through an unbounded queue drained by exactly one
//! thread, either a dedicated one or the host's own UI loop.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread::JoinHandle;

use lm_core::ports::{BackgroundTask, DispatchError, DispatcherPort, ForegroundTask};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const FOREGROUND_THREAD_NAME: &str = "lm-foreground";

pub struct TokioDispatcher {
    background: Handle,
    foreground: mpsc::UnboundedSender<ForegroundTask>,
}

impl TokioDispatcher {
    /// Create a dispatcher spawning background work on `background`, and the
    /// queue its foreground work is delivered to.
    pub fn new(background: Handle) -> (Self, ForegroundQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                background,
                foreground: tx,
            },
            ForegroundQueue { receiver: rx },
        )
    }
}

impl DispatcherPort for TokioDispatcher {
    fn dispatch_background(&self, task: BackgroundTask) -> Result<(), DispatchError> {
        // Tasks spawned after runtime shutdown are dropped, which the caller
        // observes as an abandoned task.
        self.background.spawn(task);
        Ok(())
    }

    fn dispatch_foreground(&self, task: ForegroundTask) -> Result<(), DispatchError> {
        self.foreground
            .send(task)
            .map_err(|_| DispatchError::Closed("foreground"))
    }
}

/// Receiving end of the foreground context.
///
/// Whoever owns it is the foreground thread: tasks run one at a time, in the
/// order they were dispatched.
pub struct ForegroundQueue {
    receiver: mpsc::UnboundedReceiver<ForegroundTask>,
}

impl ForegroundQueue {
    /// Run every task queued so far on the calling thread, without waiting.
    ///
    /// Intended for hosts that pump the queue from their own UI loop.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            run_task(task);
            ran += 1;
        }
        ran
    }

    /// Run tasks on the calling thread until every dispatcher has been dropped.
    ///
    /// Must not be called from within an async runtime.
    pub fn run_until_closed(mut self) {
        while let Some(task) = self.receiver.blocking_recv() {
            run_task(task);
        }
        tracing::debug!("Foreground queue closed");
    }

    /// Move the queue onto a dedicated, named thread.
    pub fn spawn_thread(self) -> std::io::Result<ForegroundThread> {
        let handle = std::thread::Builder::new()
            .name(FOREGROUND_THREAD_NAME.to_string())
            .spawn(move || self.run_until_closed())?;
        Ok(ForegroundThread { handle })
    }
}

fn run_task(task: ForegroundTask) {
    if catch_unwind(AssertUnwindSafe(task)).is_err() {
        tracing::error!("Foreground task panicked; continuing with the next task");
    }
}

/// Dedicated foreground thread; exits once every dispatcher is dropped.
pub struct ForegroundThread {
    handle: JoinHandle<()>,
}

impl ForegroundThread {
    pub fn thread_id(&self) -> std::thread::ThreadId {
        self.handle.thread().id()
    }

    pub fn join(self) -> std::thread::Result<()> {
        self.handle.join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::{oneshot, Barrier};

    #[test]
    fn run_pending_drains_in_submission_order() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (dispatcher, mut queue) = TokioDispatcher::new(runtime.handle().clone());
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let order = order.clone();
            dispatcher
                .dispatch_foreground(Box::new(move || order.lock().unwrap().push(i)))
                .unwrap();
        }

        assert_eq!(queue.run_pending(), 5);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn foreground_thread_runs_every_task_on_itself() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (dispatcher, queue) = TokioDispatcher::new(runtime.handle().clone());
        let thread = queue.spawn_thread().unwrap();
        let foreground_id = thread.thread_id();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..20 {
            let seen = seen.clone();
            dispatcher
                .dispatch_foreground(Box::new(move || {
                    let name = std::thread::current().name().map(str::to_string);
                    seen.lock()
                        .unwrap()
                        .push((i, std::thread::current().id(), name));
                }))
                .unwrap();
        }

        drop(dispatcher);
        thread.join().unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 20);
        for (expected, (i, id, name)) in seen.iter().enumerate() {
            assert_eq!(*i, expected);
            assert_eq!(*id, foreground_id);
            assert_eq!(name.as_deref(), Some(FOREGROUND_THREAD_NAME));
        }
    }

    #[test]
    fn panicking_task_does_not_stop_the_queue() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (dispatcher, mut queue) = TokioDispatcher::new(runtime.handle().clone());
        let ran = Arc::new(Mutex::new(false));

        dispatcher
            .dispatch_foreground(Box::new(|| panic!("boom")))
            .unwrap();
        let flag = ran.clone();
        dispatcher
            .dispatch_foreground(Box::new(move || *flag.lock().unwrap() = true))
            .unwrap();

        assert_eq!(queue.run_pending(), 2);
        assert!(*ran.lock().unwrap());
    }

    #[test]
    fn dropped_queue_closes_the_foreground_context() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (dispatcher, queue) = TokioDispatcher::new(runtime.handle().clone());
        drop(queue);

        let err = dispatcher.dispatch_foreground(Box::new(|| {})).unwrap_err();
        assert_eq!(err, DispatchError::Closed("foreground"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn background_tasks_run_concurrently() {
        let (dispatcher, _queue) = TokioDispatcher::new(Handle::current());
        let barrier = Arc::new(Barrier::new(2));
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();

        for tx in [tx_a, tx_b] {
            let barrier = barrier.clone();
            dispatcher
                .dispatch_background(Box::pin(async move {
                    // Neither task can pass until both are running.
                    barrier.wait().await;
                    let _ = tx.send(());
                }))
                .unwrap();
        }

        tokio::time::timeout(Duration::from_secs(5), async {
            rx_a.await.unwrap();
            rx_b.await.unwrap();
        })
        .await
        .unwrap();
    }
}
