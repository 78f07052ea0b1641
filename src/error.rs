//! Tracking error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while recording tracked paths.
///
/// Every recording failure is fatal for the record that produced it: the
/// before and after sequences are paired by position, so appending an
/// unresolved or unpatternable entry would silently corrupt every later
/// association.
#[derive(Debug, Error)]
pub enum TrackError {
    /// A before-path could not be resolved to absolute form.
    #[error("failed to resolve path `{0}`")]
    Resolve(PathBuf, #[source] std::io::Error),

    /// A path has no faithful textual form to record or substitute.
    #[error("path `{0}` is not valid UTF-8")]
    NonUtf8(PathBuf),

    /// An after-path could not be parsed as a glob.
    #[error("invalid glob `{glob}`: {reason}")]
    Glob {
        glob: String,
        reason: &'static str,
    },

    /// A derived pattern source was rejected by the regex engine.
    #[error("derived pattern `{0}` failed to compile")]
    Pattern(String, #[source] regex::Error),
}
