//! Tracking sessions.
//!
//! A [`Session`] is one isolated before/after tracking context: an ordered
//! sequence of before-paths and an ordered sequence of after-patterns,
//! associated by position. Isolation matters because the pairing is
//! positional - two unrelated transformation passes must never interleave
//! their recordings.
//!
//! [`Registry`] owns sessions and aggregates replacement across them.

pub mod registry;

pub use registry::Registry;

use std::borrow::Cow;
use std::path::Path;

use parking_lot::RwLock;
use regex::NoExpand;
use tracing::trace;

use crate::error::TrackError;
use crate::pattern::AfterPattern;
use crate::utils::path::resolve_absolute;

/// One before/after tracking context.
///
/// The i-th recorded after-path corresponds to the i-th recorded
/// before-path, in arrival order. The two sequences may have different
/// lengths while the streams are still draining; every operation is safe
/// under that asymmetry.
#[derive(Debug, Default)]
pub struct Session {
    /// Absolute, platform-normalized before-paths. Append-only.
    before: RwLock<Vec<String>>,
    /// Patterns derived from after-paths. Append-only.
    after: RwLock<Vec<AfterPattern>>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file's path as it was before transformation.
    ///
    /// The path is resolved to absolute, platform-canonical form before
    /// being appended.
    ///
    /// # Errors
    ///
    /// Resolution failure is fatal for the record - appending an
    /// unresolved entry would corrupt the positional pairing.
    pub fn record_before(&self, path: &Path) -> Result<(), TrackError> {
        let resolved = resolve_absolute(path)?;
        let resolved = resolved
            .to_str()
            .ok_or_else(|| TrackError::NonUtf8(resolved.clone()))?
            .to_owned();
        trace!(path = %resolved, "recorded before-path");
        self.before.write().push(resolved);
        Ok(())
    }

    /// Record a file's path as produced by the transformation.
    ///
    /// The path text is turned into a cross-platform substring pattern
    /// and appended; see [`AfterPattern::for_path`].
    ///
    /// # Errors
    ///
    /// Pattern derivation failure is fatal for the record, for the same
    /// pairing reason as [`Session::record_before`].
    pub fn record_after(&self, path: &Path) -> Result<(), TrackError> {
        let raw = path
            .to_str()
            .ok_or_else(|| TrackError::NonUtf8(path.to_path_buf()))?;
        let pattern = AfterPattern::for_path(raw)?;
        trace!(pattern = pattern.source(), "recorded after-pattern");
        self.after.write().push(pattern);
        Ok(())
    }

    /// Replace occurrences of recorded after-paths with the corresponding
    /// before-paths.
    ///
    /// Pairs are applied in reverse recording order (LIFO) over the
    /// overlap of the two sequences: a later-recorded mapping is applied
    /// before an earlier, possibly overlapping one can rewrite the text
    /// underneath it. Entries beyond the shorter sequence are ignored
    /// until the other stream catches up.
    ///
    /// Before-paths are substituted literally; a `$` in a path is never
    /// treated as a capture reference.
    ///
    /// Read-only: safe to call repeatedly, and concurrently with further
    /// recording (the result reflects whatever pairs are visible at call
    /// time). Returns `Cow::Borrowed` when nothing matched.
    pub fn replace<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let before = self.before.read();
        let after = self.after.read();
        let pairs = before.len().min(after.len());

        let mut text = Cow::Borrowed(text);
        for i in (0..pairs).rev() {
            if let Cow::Owned(replaced) = after[i]
                .regex()
                .replace_all(&text, NoExpand(before[i].as_str()))
            {
                text = Cow::Owned(replaced);
            }
        }
        text
    }

    /// Snapshot of the recorded before-paths, in arrival order.
    pub fn before_paths(&self) -> Vec<String> {
        self.before.read().clone()
    }

    /// Snapshot of the recorded after-pattern sources, in arrival order.
    pub fn after_sources(&self) -> Vec<String> {
        self.after
            .read()
            .iter()
            .map(|p| p.source().to_owned())
            .collect()
    }

    /// Number of fully associated before/after pairs.
    pub fn pair_count(&self) -> usize {
        self.before.read().len().min(self.after.read().len())
    }

    /// True when nothing has been recorded on either side.
    pub fn is_empty(&self) -> bool {
        self.before.read().is_empty() && self.after.read().is_empty()
    }
}
