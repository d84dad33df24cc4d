//! Concurrent scans delivering items over a rendezvous channel.
//!
//! [`spawn()`] runs the driver loop on a dedicated named thread and hands
//! items to the consumer through a zero-capacity channel: synchronous,
//! ordered, single-producer/single-consumer. The producer blocks in the
//! send until the consumer receives, so a slow consumer stalls the scan
//! instead of growing a buffer; emissions made within a single state
//! invocation are queued and then delivered one send at a time.
//!
//! # Abandoned Consumers
//!
//! A rendezvous producer whose consumer stops receiving would otherwise
//! stay blocked in the send forever. [`ScanHandle`] closes the channel when
//! dropped (or on an explicit [`close()`](ScanHandle::close)), which fails
//! the producer's pending send and ends its thread promptly. Cancelling
//! this way discards whatever input was not yet scanned; it cannot be
//! resumed.

use std::io;
use std::iter::FusedIterator;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver};
use thiserror::Error;

use crate::item::Item;
use crate::scanner::{Scanner, StateFn};

/// Operational failures of a spawned scan.
///
/// Grammar-level "unexpected input" never surfaces here — that is an
/// ordinary emitted item recognized by tag convention. These are failures
/// of the machinery around the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The OS refused to start the scan thread.
    #[error("failed to spawn scan thread: {0}")]
    Spawn(#[from] io::Error),
    /// A state function panicked on the scan thread.
    #[error("scan {name:?} panicked in a state function")]
    Panicked {
        /// Diagnostic name of the failed scan.
        name: String,
    },
}

/// Consumer-side handle to a scan running on its own thread.
///
/// Receive items with [`recv()`](Self::recv) or by iterating; `None` / end
/// of iteration signals that the channel closed. Closure with no trailing
/// error-tagged item is clean completion; an error-tagged item immediately
/// before closure is an abort, by the grammar's own tag convention.
#[derive(Debug)]
pub struct ScanHandle<T> {
    name: String,
    /// `None` once the handle has been closed.
    items: Option<Receiver<Item<'static, T>>>,
    thread: Option<JoinHandle<()>>,
}

/// Start scanning `input` on a dedicated thread, beginning in `start`.
///
/// Returns immediately; the scan runs until its state graph terminates or
/// the handle is closed. `name` identifies the scan in diagnostics and
/// names the thread (`scan-<name>`).
pub fn spawn<T: Send + 'static>(
    name: impl Into<String>,
    input: impl Into<String>,
    start: StateFn<T>,
) -> Result<ScanHandle<T>, ScanError> {
    let name = name.into();
    let input = input.into();
    let (tx, rx) = channel::bounded(0);
    let thread = thread::Builder::new().name(format!("scan-{name}")).spawn({
        let name = name.clone();
        move || {
            let scanner = Scanner::new(&name, &input, start);
            for item in scanner {
                if tx.send(item.into_owned()).is_err() {
                    tracing::debug!(scan = %name, "consumer gone, cancelling scan");
                    return;
                }
            }
            tracing::trace!(scan = %name, "scan delivered to completion");
        }
    })?;
    Ok(ScanHandle {
        name,
        items: Some(rx),
        thread: Some(thread),
    })
}

impl<T> ScanHandle<T> {
    /// Diagnostic name the scan was constructed with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Receive the next item, blocking until one is emitted or the channel
    /// closes. Returns `None` after closure (and forever after `close()`).
    pub fn recv(&self) -> Option<Item<'static, T>> {
        self.items.as_ref()?.recv().ok()
    }

    /// Cancel the scan: close the channel and wait for the producer thread
    /// to end. Idempotent; also run on drop. Items not yet received are
    /// discarded.
    pub fn close(&mut self) {
        if self.items.take().is_some() {
            tracing::debug!(scan = %self.name, "closing scan handle");
        }
        if let Some(thread) = self.thread.take() {
            // The disconnect above fails any pending send, so this join
            // completes promptly.
            let _ = thread.join();
        }
    }

    /// Wait for the producer thread to end and report how it ended.
    ///
    /// Call after draining the channel: a state function that panicked
    /// surfaces as [`ScanError::Panicked`] instead of disappearing with its
    /// thread. Calling before the channel closes cancels the scan first,
    /// like [`close()`](Self::close).
    pub fn join(mut self) -> Result<(), ScanError> {
        self.items = None;
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| ScanError::Panicked {
                name: self.name.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl<T> Iterator for ScanHandle<T> {
    type Item = Item<'static, T>;

    fn next(&mut self) -> Option<Item<'static, T>> {
        self.recv()
    }
}

impl<T> FusedIterator for ScanHandle<T> {}

impl<T> Drop for ScanHandle<T> {
    fn drop(&mut self) {
        self.close();
    }
}
