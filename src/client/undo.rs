//! Single-slot undo for optimistic mutations.
//!
//! A screen deletes or edits a record, then registers the action that
//! reverses it together with a prompt ("Deleted X. Undo?"). At most one
//! reversal is pending at a time; registering another replaces it, and a
//! pending reversal runs at most once whether it succeeds or fails.

use std::future::Future;

use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

use super::ClientError;

/// Message shown after a reversal completes
pub const UNDO_COMPLETE: &str = "Undo successful";

pub type ReverseFuture = BoxFuture<'static, Result<(), ClientError>>;
pub type Reverse = Box<dyn FnOnce() -> ReverseFuture + Send>;

struct PendingUndo<T> {
    snapshot: T,
    reverse: Reverse,
}

pub struct UndoController<T> {
    pending: Option<PendingUndo<T>>,
    message: Option<String>,
}

impl<T> Default for UndoController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UndoController<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            message: None,
        }
    }

    /// Stores `reverse` as the pending undo and publishes `message`.
    /// Any undo already pending is dropped without running.
    pub fn register_undo<F, Fut>(&mut self, snapshot: T, reverse: F, message: impl Into<String>)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ClientError>> + Send + 'static,
    {
        let reverse: Reverse = Box::new(move || reverse().boxed());
        let message = message.into();

        if self.pending.replace(PendingUndo { snapshot, reverse }).is_some() {
            debug!("Replaced pending undo with \"{}\"", message);
        } else {
            debug!("Registered undo \"{}\"", message);
        }
        self.message = Some(message);
    }

    /// Runs the pending reversal, if any. The slot is emptied before the
    /// reversal is awaited, so it can never run twice; on failure the error
    /// is returned and the prompt is withdrawn.
    pub async fn undo(&mut self) -> Result<(), ClientError> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };

        match (pending.reverse)().await {
            Ok(()) => {
                self.message = Some(UNDO_COMPLETE.to_string());
                Ok(())
            }
            Err(err) => {
                self.message = None;
                Err(err)
            }
        }
    }

    /// Dismisses the prompt and drops the pending reversal unexecuted.
    pub fn clear_message(&mut self) {
        if self.pending.take().is_some() {
            debug!("Dismissed pending undo");
        }
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn snapshot(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.snapshot)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
