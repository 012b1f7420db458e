use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::Todo;

/// Repository trait for Todo persistence
///
/// Every method is one atomic statement against the store. Existence is
/// reported through affected-row counts rather than separate lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a todo and return the id the store generated for it
    async fn insert(&self, subject: String, description: String) -> TodoResult<i64>;

    /// Fetch a single todo
    async fn fetch_one(&self, id: i64) -> TodoResult<Option<Todo>>;

    /// Fetch up to `limit` todos in ascending id order, starting after `after_id` if given
    async fn fetch_range(&self, after_id: Option<i64>, limit: u64) -> TodoResult<Vec<Todo>>;

    /// Overwrite subject and description, refreshing `updated_at`; returns affected rows
    async fn update_fields(&self, id: i64, subject: String, description: String)
        -> TodoResult<u64>;

    /// Delete every todo whose id is in `ids`; returns affected rows
    async fn delete_by_ids(&self, ids: Vec<i64>) -> TodoResult<u64>;
}
