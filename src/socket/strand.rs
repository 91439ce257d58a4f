//! Per-socket operation serialization.

use futures::future::BoxFuture;
use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// A FIFO serialization domain for one socket.
///
/// Jobs dispatched onto a strand run one at a time, in submission order, and
/// each job runs to full completion (across all of its await points) before
/// the next job starts. Jobs may be dispatched from any thread; the strand
/// itself does no locking beyond the queue handoff, so socket state touched
/// only from strand jobs needs no synchronization of its own.
///
/// The driver task lives on the runtime whose handle was passed at
/// construction and exits once every handle to the strand is gone. Jobs
/// dispatched after the runtime has shut down are dropped without running.
pub struct Strand {
    queue: mpsc::UnboundedSender<BoxFuture<'static, ()>>,
}

impl Strand {
    /// Creates a strand whose jobs run on the given runtime.
    pub fn new(handle: &Handle) -> Self {
        let (queue, mut jobs) = mpsc::unbounded_channel::<BoxFuture<'static, ()>>();
        handle.spawn(async move {
            while let Some(job) = jobs.recv().await {
                job.await;
            }
        });
        Self { queue }
    }

    /// Enqueues a job; returns immediately.
    pub fn dispatch<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Send only fails once the driver is gone, which means the runtime is
        // shutting down; the job is dropped, not run.
        let _ = self.queue.send(Box::pin(job));
    }
}
