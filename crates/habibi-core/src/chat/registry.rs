//! Registry of live chat sessions keyed by handle.
//!
//! Each session sits behind its own async mutex. A chat exchange holds the
//! lock across the dispatch, so turns of one session never interleave while
//! different sessions proceed independently.
//!
//! Sessions that go unused for longer than the idle TTL are evicted. The
//! sweep runs on every `create` and from [`SessionRegistry::evict_idle`],
//! which the server calls periodically. A session whose lock is held is
//! in use and never evicted.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::session::ChatSession;

/// Shared handle to one session's transcript.
pub type SessionHandle = Arc<Mutex<ChatSession>>;

/// Idle time after which an untouched session is dropped.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    handle: SessionHandle,
    last_active: Instant,
}

pub struct SessionRegistry {
    sessions: DashMap<Uuid, SessionEntry>,
    idle_ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Start a new empty session and return its id and handle.
    ///
    /// Idle sessions are swept first.
    pub fn create(&self) -> (Uuid, SessionHandle) {
        self.evict_idle();

        let session = ChatSession::new();
        let id = session.id();
        let handle = Arc::new(Mutex::new(session));
        self.sessions.insert(
            id,
            SessionEntry {
                handle: handle.clone(),
                last_active: Instant::now(),
            },
        );
        tracing::debug!(session_id = %id, "Chat session created");
        (id, handle)
    }

    /// Look up a session and mark it active.
    pub fn get(&self, id: &Uuid) -> Option<SessionHandle> {
        self.sessions.get_mut(id).map(|mut entry| {
            entry.last_active = Instant::now();
            entry.handle.clone()
        })
    }

    /// Discard a session. Returns false if it was not registered.
    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            tracing::debug!(session_id = %id, "Chat session discarded");
        }
        removed
    }

    /// Drop sessions idle for longer than the TTL. Returns how many were dropped.
    pub fn evict_idle(&self) -> usize {
        let before = self.sessions.len();
        let ttl = self.idle_ttl;
        self.sessions.retain(|_, entry| {
            entry.last_active.elapsed() < ttl || entry.handle.try_lock().is_err()
        });
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            tracing::debug!(evicted, remaining = self.sessions.len(), "Evicted idle chat sessions");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
