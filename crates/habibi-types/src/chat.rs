//! Chat turn and persisted message types.
//!
//! A [`ChatTurn`] lives in the in-memory session transcript. A
//! [`PersistedMessage`] is the row shape of the append-only `chat` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who produced a turn in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message in a session transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Value of the `sender` column in the `chat` table.
///
/// Stored as `User` / `AI`, matching the labels shown in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    #[serde(rename = "AI")]
    Ai,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Ai => "AI",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "User" => Ok(Sender::User),
            "AI" => Ok(Sender::Ai),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A row of the append-only chat log.
///
/// `timestamp` is filled by SQLite (`CURRENT_TIMESTAMP`) at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedMessage {
    pub sender: Sender,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of one successful chat exchange.
///
/// `storage_error` is set when the turns reached the transcript but the
/// row pair could not be written to the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user: ChatTurn,
    pub assistant: ChatTurn,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_error: Option<String>,
}

impl ChatExchange {
    pub fn persisted(&self) -> bool {
        self.storage_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_serde() {
        let json = serde_json::to_string(&TurnRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: TurnRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, TurnRole::User);
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.to_string(), "User");
        assert_eq!(Sender::Ai.to_string(), "AI");
        assert_eq!("AI".parse::<Sender>().unwrap(), Sender::Ai);
        assert!("ai".parse::<Sender>().is_err());
        assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"AI\"");
    }

    #[test]
    fn test_chat_turn_constructors() {
        let turn = ChatTurn::user("Hello");
        assert_eq!(turn.role, TurnRole::User);
        assert_eq!(turn.content, "Hello");

        let turn = ChatTurn::assistant("Marhaba");
        assert_eq!(turn.role, TurnRole::Assistant);
    }

    #[test]
    fn test_exchange_omits_storage_error_when_persisted() {
        let exchange = ChatExchange {
            user: ChatTurn::user("hi"),
            assistant: ChatTurn::assistant("hello"),
            storage_error: None,
        };
        assert!(exchange.persisted());
        let json = serde_json::to_value(&exchange).unwrap();
        assert!(json.get("storage_error").is_none());
        assert_eq!(json["assistant"]["role"], "assistant");
    }
}
