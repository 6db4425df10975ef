//! Run-wide accumulation of file results.
//!
//! A single thread owns the [`Summary`]. Counting tasks never touch it
//! directly; they send updates through a [`TallySender`], and the owning
//! thread applies them one at a time. [`Aggregator::finish`] closes the
//! channel and hands back the final summary once every queued update has
//! been applied.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

use crate::stats::{Summary, Tally};

#[derive(Debug)]
enum Update {
    Dispatched,
    Counted(Tally),
    Failed,
}

/// Cloneable handle used by the walker and counting tasks to report progress.
#[derive(Debug, Clone)]
pub struct TallySender {
    tx: Sender<Update>,
}

impl TallySender {
    /// A matching file was found and is about to be counted.
    pub fn dispatched(&self) {
        self.send(Update::Dispatched);
    }

    /// A file was read successfully.
    pub fn counted(&self, tally: Tally) {
        self.send(Update::Counted(tally));
    }

    /// A file could not be read; it contributes no lines.
    pub fn failed(&self) {
        self.send(Update::Failed);
    }

    fn send(&self, update: Update) {
        // Only fails if the accumulating thread panicked.
        if self.tx.send(update).is_err() {
            debug!("aggregator already closed, update dropped");
        }
    }
}

/// Owner of the run-wide summary.
#[derive(Debug)]
pub struct Aggregator {
    sender: TallySender,
    handle: JoinHandle<Summary>,
}

impl Aggregator {
    /// Start the aggregating thread with a zeroed summary.
    pub fn spawn() -> Self {
        let (tx, rx) = unbounded();
        let handle = thread::spawn(move || accumulate(rx));
        Self {
            sender: TallySender { tx },
            handle,
        }
    }

    /// A new handle for reporting updates.
    pub fn sender(&self) -> TallySender {
        self.sender.clone()
    }

    /// Close the channel and wait for the final summary.
    ///
    /// Blocks until every outstanding [`TallySender`] clone has been dropped.
    pub fn finish(self) -> Summary {
        let Self { sender, handle } = self;
        drop(sender);
        match handle.join() {
            Ok(summary) => summary,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

fn accumulate(rx: Receiver<Update>) -> Summary {
    let mut summary = Summary::new();
    for update in rx {
        match update {
            Update::Dispatched => summary.file_count += 1,
            Update::Counted(tally) => summary.merge(tally),
            Update::Failed => summary.failed += 1,
        }
    }
    summary
}
