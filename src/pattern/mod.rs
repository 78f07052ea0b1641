//! After-path pattern derivation.
//!
//! An after-path is recorded as a *pattern*, not a literal string:
//! glob-style compilation neutralizes the regex metacharacters found in
//! typical paths, and separator generalization lets one pattern match
//! text generated on either platform.
//!
//! Derivation pipeline:
//!
//! ```text
//! path --> glob::compile --> strip_anchors --> generalize_separators --> Regex
//! ```

pub mod glob;
pub mod transform;

use regex::{Regex, RegexBuilder};

use crate::error::TrackError;

/// A matcher for one recorded after-path.
///
/// Carries the derived regex source and the regex compiled from it at
/// record time, so replacement itself cannot fail.
#[derive(Debug, Clone)]
pub struct AfterPattern {
    source: String,
    regex: Regex,
}

impl AfterPattern {
    /// Derive the pattern for a transformed file's path.
    ///
    /// The result matches the path text as a substring anywhere in larger
    /// text, with either separator style.
    ///
    /// # Errors
    ///
    /// Fails when the path cannot be compiled as a glob or the derived
    /// source is rejected by the regex engine. Either case is fatal for
    /// the record; see [`TrackError`].
    pub fn for_path(path: &str) -> Result<Self, TrackError> {
        let anchored = glob::compile(path)?;
        let source = transform::generalize_separators(transform::strip_anchors(&anchored));
        let regex = RegexBuilder::new(&source)
            .multi_line(true)
            .build()
            .map_err(|e| TrackError::Pattern(source.clone(), e))?;
        Ok(Self { source, regex })
    }

    /// The derived regex source (anchors stripped, separators generalized).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled matcher.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}
