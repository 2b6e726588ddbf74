//! ChatLogRepository trait definition.
//!
//! The append-only sink for chat rows. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition). Implementations live in habibi-infra
//! (e.g., `SqliteChatLogRepository`).

use habibi_types::error::StorageError;

pub trait ChatLogRepository: Send + Sync {
    /// Create the `chat` table if it does not exist. Idempotent.
    fn ensure_schema(
        &self,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Append the `User` row then the `AI` row for one exchange.
    fn insert_pair(
        &self,
        user_text: &str,
        assistant_text: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Total number of rows in the log.
    fn count_messages(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, StorageError>> + Send;
}
