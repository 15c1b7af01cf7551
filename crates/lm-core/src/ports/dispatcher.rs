use futures::future::BoxFuture;

use crate::ports::errors::DispatchError;

/// Unit of I/O-bound work submitted to the background context.
pub type BackgroundTask = BoxFuture<'static, ()>;

/// Unit of UI-triggering work submitted to the foreground context.
pub type ForegroundTask = Box<dyn FnOnce() + Send + 'static>;

/// Routes work to the two execution contexts.
///
/// Contract:
/// - background: any number of tasks may run concurrently
/// - foreground: tasks run one at a time, in submission order, on a single thread
pub trait DispatcherPort: Send + Sync {
    fn dispatch_background(&self, task: BackgroundTask) -> Result<(), DispatchError>;

    fn dispatch_foreground(&self, task: ForegroundTask) -> Result<(), DispatchError>;
}
