//! Session registry.

use std::borrow::Cow;
use std::sync::Arc;

use parking_lot::RwLock;

use super::Session;

/// Owner of all tracking sessions.
///
/// An explicit object rather than process-global state: callers construct
/// one and pass it to whatever drives the build. Sessions are appended in
/// creation order and never removed.
#[derive(Debug, Default)]
pub struct Registry {
    sessions: RwLock<Vec<Arc<Session>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session separated from all others.
    ///
    /// Separation is what keeps the positional before/after association
    /// intact when several transformation passes run over the same build.
    /// The registry keeps ownership; the returned handle can be held and
    /// used directly.
    pub fn create_session(&self) -> Arc<Session> {
        let session = Arc::new(Session::new());
        self.sessions.write().push(Arc::clone(&session));
        session
    }

    /// Replace recorded after-paths with before-paths across all sessions.
    ///
    /// Sessions are applied in creation order, each pass's output feeding
    /// the next pass's input. Pure with respect to registry state; returns
    /// `Cow::Borrowed` when no session changed anything.
    pub fn replace_all<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let sessions = self.sessions.read();
        let mut text = Cow::Borrowed(text);
        for session in sessions.iter() {
            if let Cow::Owned(replaced) = session.replace(&text) {
                text = Cow::Owned(replaced);
            }
        }
        text
    }

    /// Number of sessions created so far.
    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
