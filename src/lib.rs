//! Pathtrack - before/after path tracking for build pipelines.
//!
//! A build transformation renames files (`src/a.js` becomes
//! `build/a.min.js`), but text generated afterwards - source maps, logs,
//! cross-references - still mentions the new names. Pathtrack records both
//! path streams and rewrites the transformed names found in such text back
//! to their sources.
//!
//! ```text
//! before files --> [BeforeStage] --> transformation --> [AfterStage] --> ...
//!                       |                                    |
//!                       v                                    v
//!                 Session.before <--- paired by index ---> Session.after
//!                                       |
//!                                 replace(text)
//! ```
//!
//! A [`Session`] is one isolated before/after tracking context, so
//! unrelated transformation passes cannot cross-contaminate their path
//! associations. A [`Registry`] owns every session it creates and offers
//! an aggregate replace across all of them.
//!
//! # Example
//!
//! ```ignore
//! use pathtrack::Registry;
//!
//! let registry = Registry::new();
//! let session = registry.create_session();
//!
//! session.record_before("/proj/src/a.js".as_ref())?;
//! // ... transformation runs ...
//! session.record_after("/proj/build/a.min.js".as_ref())?;
//!
//! let fixed = session.replace("see /proj/build/a.min.js for details");
//! assert_eq!(fixed, "see /proj/src/a.js for details");
//! ```

pub mod error;
pub mod pattern;
pub mod session;
pub mod stage;
pub mod utils;

pub use error::TrackError;
pub use pattern::AfterPattern;
pub use session::{Registry, Session};
pub use stage::{AfterStage, BeforeStage, PathRecord};
