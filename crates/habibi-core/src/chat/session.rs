//! Per-session transcript store.
//!
//! Append is the only mutation. Insertion order is the only ordering
//! guarantee; turns are never reordered, deduplicated, or removed.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use habibi_types::chat::ChatTurn;

/// Transcript of one interactive session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    /// Create an empty session with a fresh time-sortable id.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// All turns in insertion order.
    pub fn all(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habibi_types::chat::TurnRole;

    #[test]
    fn test_new_session_is_empty() {
        let session = ChatSession::new();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
        assert!(session.all().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut session = ChatSession::new();
        session.append(ChatTurn::user("first"));
        session.append(ChatTurn::assistant("second"));
        session.append(ChatTurn::user("first"));

        let contents: Vec<&str> = session.all().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "first"]);
        assert_eq!(session.all()[1].role, TurnRole::Assistant);
    }

    #[test]
    fn test_all_is_repeatable() {
        let mut session = ChatSession::new();
        session.append(ChatTurn::user("Hello"));
        session.append(ChatTurn::assistant("Marhaba"));

        let first = session.all().to_vec();
        let second = session.all().to_vec();
        assert_eq!(first, second);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = ChatSession::new();
        let b = ChatSession::new();
        assert_ne!(a.id(), b.id());
    }
}
