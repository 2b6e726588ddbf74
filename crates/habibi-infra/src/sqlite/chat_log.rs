//! SQLite chat log implementation.
//!
//! Implements `ChatLogRepository` from `habibi-core` with raw sqlx queries on
//! the split reader/writer pool. Each exchange is written as a `User` row and
//! an `AI` row inside one transaction on the single writer connection.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::Row;

use habibi_core::chat::repository::ChatLogRepository;
use habibi_types::chat::{PersistedMessage, Sender};
use habibi_types::error::StorageError;

use super::pool::DatabasePool;

const CREATE_CHAT_TABLE: &str = "CREATE TABLE IF NOT EXISTS chat \
     (sender TEXT, message TEXT, timestamp DATETIME DEFAULT CURRENT_TIMESTAMP)";

/// SQLite-backed implementation of `ChatLogRepository`.
#[derive(Clone)]
pub struct SqliteChatLogRepository {
    pool: DatabasePool,
}

impl SqliteChatLogRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Most recent rows, returned oldest first.
    pub async fn recent_messages(&self, limit: u32) -> Result<Vec<PersistedMessage>, StorageError> {
        let rows = sqlx::query(
            "SELECT sender, message, CAST(timestamp AS TEXT) AS timestamp FROM \
             (SELECT rowid AS seq, sender, message, timestamp FROM chat ORDER BY rowid DESC LIMIT ?) \
             ORDER BY seq ASC",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let row = ChatLogRow::from_row(row).map_err(query_error)?;
            messages.push(row.into_message()?);
        }
        Ok(messages)
    }
}

// ---------------------------------------------------------------------------
// Private row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ChatLogRow {
    sender: String,
    message: String,
    timestamp: String,
}

impl ChatLogRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            sender: row.try_get("sender")?,
            message: row.try_get("message")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Result<PersistedMessage, StorageError> {
        let sender: Sender = self.sender.parse().map_err(StorageError::Query)?;
        Ok(PersistedMessage {
            sender,
            message: self.message,
            timestamp: parse_timestamp(&self.timestamp)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `CURRENT_TIMESTAMP` yields `YYYY-MM-DD HH:MM:SS` in UTC.
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, StorageError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Query(format!("invalid timestamp '{s}': {e}")))
}

fn query_error(e: sqlx::Error) -> StorageError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => StorageError::Connection,
        other => StorageError::Query(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// ChatLogRepository implementation
// ---------------------------------------------------------------------------

impl ChatLogRepository for SqliteChatLogRepository {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_CHAT_TABLE)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;
        Ok(())
    }

    async fn insert_pair(&self, user_text: &str, assistant_text: &str) -> Result<(), StorageError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        for (sender, text) in [(Sender::User, user_text), (Sender::Ai, assistant_text)] {
            sqlx::query("INSERT INTO chat (sender, message) VALUES (?, ?)")
                .bind(sender.as_str())
                .bind(text)
                .execute(&mut *tx)
                .await
                .map_err(query_error)?;
        }

        tx.commit().await.map_err(query_error)?;
        Ok(())
    }

    async fn count_messages(&self) -> Result<u64, StorageError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        Ok(row.0 as u64)
    }
}
