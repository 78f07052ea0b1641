//! Pass-through tracking stages.
//!
//! The recording half of the crate, shaped for a channel pipeline: each
//! stage receives file records one at a time, notes the path on its
//! session, then forwards the identical record downstream. The awaited
//! send is the per-record completion signal - a stage suspends there,
//! never mid-record, so arrival order is the association index.
//!
//! ```text
//! rx --> [BeforeStage] --> tx ... transformation ... rx --> [AfterStage] --> tx
//!              |                                                 |
//!              +---------------------> Session <----------------+
//! ```
//!
//! One-in-one-out is strict: no record is dropped, duplicated, or
//! reordered. A recording failure ends the stage with an error (the
//! dropped channels tell both neighbours); a closed downstream ends it
//! cleanly, and everything recorded so far stays queryable.

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc::{Receiver, Sender};
use tracing::debug;

use crate::error::TrackError;
use crate::session::Session;

/// A file-like record moving through the pipeline.
///
/// The stages look at nothing but the path; content and metadata pass
/// through untouched.
pub trait PathRecord {
    /// The record's filesystem path.
    fn path(&self) -> &Path;
}

impl PathRecord for PathBuf {
    fn path(&self) -> &Path {
        self
    }
}

/// Stage that records file paths as they are before transformation.
pub struct BeforeStage<R> {
    session: Arc<Session>,
    rx: Receiver<R>,
    tx: Sender<R>,
}

impl<R: PathRecord> BeforeStage<R> {
    pub fn new(session: Arc<Session>, rx: Receiver<R>, tx: Sender<R>) -> Self {
        Self { session, rx, tx }
    }

    /// Run the stage until the input stream ends.
    ///
    /// # Errors
    ///
    /// Returns the first recording failure; the record that caused it is
    /// not forwarded.
    pub async fn run(mut self) -> Result<(), TrackError> {
        while let Some(record) = self.rx.recv().await {
            self.session.record_before(record.path())?;
            if self.tx.send(record).await.is_err() {
                debug!("before stage: downstream closed");
                break;
            }
        }
        Ok(())
    }
}

/// Stage that records file paths as produced by the transformation.
pub struct AfterStage<R> {
    session: Arc<Session>,
    rx: Receiver<R>,
    tx: Sender<R>,
}

impl<R: PathRecord> AfterStage<R> {
    pub fn new(session: Arc<Session>, rx: Receiver<R>, tx: Sender<R>) -> Self {
        Self { session, rx, tx }
    }

    /// Run the stage until the input stream ends.
    ///
    /// # Errors
    ///
    /// Returns the first pattern-derivation failure; the record that
    /// caused it is not forwarded.
    pub async fn run(mut self) -> Result<(), TrackError> {
        while let Some(record) = self.rx.recv().await {
            self.session.record_after(record.path())?;
            if self.tx.send(record).await.is_err() {
                debug!("after stage: downstream closed");
                break;
            }
        }
        Ok(())
    }
}
