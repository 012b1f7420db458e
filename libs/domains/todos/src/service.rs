use std::sync::Arc;
use tracing::instrument;

use crate::error::{TodoError, TodoResult};
use crate::models::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Todo};
use crate::repository::TodoRepository;

/// Service layer for Todo operations
///
/// Holds no state of its own; every operation is translated into repository
/// calls. Input is assumed to be validated by the caller.
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a todo and return it as persisted, including store-assigned timestamps.
    ///
    /// The confirm-read is a separate statement. If the row is gone by then the
    /// insert stays committed and [`TodoError::Consistency`] is returned.
    #[instrument(skip(self, subject, description))]
    pub async fn create_todo(&self, subject: String, description: String) -> TodoResult<Todo> {
        let id = self.repository.insert(subject, description).await?;

        self.repository
            .fetch_one(id)
            .await?
            .ok_or(TodoError::Consistency { id })
    }

    /// Read one page of todos in ascending id order.
    ///
    /// `prev_id` is the last id of the previous page; only positive values act
    /// as a cursor. A `size` of zero means [`DEFAULT_PAGE_SIZE`]; sizes past
    /// [`MAX_PAGE_SIZE`] are clamped to it.
    #[instrument(skip(self))]
    pub async fn read_todos(&self, prev_id: Option<i64>, size: u64) -> TodoResult<Vec<Todo>> {
        let limit = match size {
            0 => DEFAULT_PAGE_SIZE,
            n => n.min(MAX_PAGE_SIZE),
        };
        let cursor = prev_id.filter(|id| *id > 0);

        self.repository.fetch_range(cursor, limit).await
    }

    /// Overwrite a todo's subject and description.
    #[instrument(skip(self, subject, description), fields(todo_id = id))]
    pub async fn update_todo(
        &self,
        id: i64,
        subject: String,
        description: String,
    ) -> TodoResult<Todo> {
        let affected = self
            .repository
            .update_fields(id, subject, description)
            .await?;

        if affected == 0 {
            return Err(TodoError::not_found(id));
        }

        // A delete may land between the update and this read
        self.repository
            .fetch_one(id)
            .await?
            .ok_or_else(|| TodoError::not_found(id))
    }

    /// Delete todos in bulk.
    ///
    /// Succeeds when at least one id matched. Fails with
    /// [`TodoError::NotFound`] only when none did, which also covers repeating
    /// a delete that already succeeded.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn delete_todos(&self, ids: Vec<i64>) -> TodoResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let affected = self.repository.delete_by_ids(ids.clone()).await?;

        if affected == 0 {
            return Err(TodoError::NotFound { ids });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTodoRepository;
    use chrono::Utc;
    use mockall::predicate::{always, eq};
    use sea_orm::DbErr;

    fn todo(id: i64, subject: &str) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            subject: subject.to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_returns_confirmed_row() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_insert()
            .with(eq("buy milk".to_string()), eq(String::new()))
            .times(1)
            .returning(|_, _| Ok(1));
        mock_repo
            .expect_fetch_one()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(todo(id, "buy milk"))));

        let service = TodoService::new(mock_repo);
        let created = service
            .create_todo("buy milk".to_string(), String::new())
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.subject, "buy milk");
    }

    #[tokio::test]
    async fn test_create_missing_confirm_row_is_consistency_error() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_insert().returning(|_, _| Ok(9));
        mock_repo.expect_fetch_one().with(eq(9)).returning(|_| Ok(None));

        let service = TodoService::new(mock_repo);
        let result = service.create_todo("s".to_string(), String::new()).await;

        assert!(matches!(result, Err(TodoError::Consistency { id: 9 })));
    }

    #[tokio::test]
    async fn test_create_propagates_storage_error_without_confirm() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_insert().returning(|_, _| {
            Err(TodoError::database("insert")(DbErr::Custom("constraint failed".into())))
        });
        mock_repo.expect_fetch_one().never();

        let service = TodoService::new(mock_repo);
        let result = service.create_todo("s".to_string(), String::new()).await;

        assert!(matches!(
            result,
            Err(TodoError::Database { operation: "insert", .. })
        ));
    }

    #[tokio::test]
    async fn test_read_defaults_page_size_to_five() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_fetch_range()
            .with(eq(None), eq(DEFAULT_PAGE_SIZE))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = TodoService::new(mock_repo);
        let todos = service.read_todos(None, 0).await.unwrap();

        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_read_ignores_non_positive_cursor() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_fetch_range()
            .with(eq(None), eq(2))
            .times(2)
            .returning(|_, _| Ok(vec![]));

        let service = TodoService::new(mock_repo);
        service.read_todos(Some(0), 2).await.unwrap();
        service.read_todos(Some(-4), 2).await.unwrap();
    }

    #[tokio::test]
    async fn test_read_passes_positive_cursor() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_fetch_range()
            .with(eq(Some(2)), eq(2))
            .times(1)
            .returning(|_, _| Ok(vec![todo(3, "third")]));

        let service = TodoService::new(mock_repo);
        let todos = service.read_todos(Some(2), 2).await.unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 3);
    }

    #[tokio::test]
    async fn test_read_clamps_oversized_page() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_fetch_range()
            .with(eq(None), eq(MAX_PAGE_SIZE))
            .times(2)
            .returning(|_, _| Ok(vec![]));

        let service = TodoService::new(mock_repo);
        service.read_todos(None, u64::MAX).await.unwrap();
        service.read_todos(None, MAX_PAGE_SIZE + 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_zero_rows_is_not_found_without_reread() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_update_fields()
            .with(eq(42), always(), always())
            .returning(|_, _, _| Ok(0));
        mock_repo.expect_fetch_one().never();

        let service = TodoService::new(mock_repo);
        let result = service
            .update_todo(42, "new subject".to_string(), String::new())
            .await;

        match result {
            Err(TodoError::NotFound { ids }) => assert_eq!(ids, vec![42]),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_returns_reread_row() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_update_fields()
            .with(eq(1), eq("new subject".to_string()), eq("new desc".to_string()))
            .returning(|_, _, _| Ok(1));
        mock_repo.expect_fetch_one().with(eq(1)).returning(|id| {
            let mut updated = todo(id, "new subject");
            updated.description = "new desc".to_string();
            Ok(Some(updated))
        });

        let service = TodoService::new(mock_repo);
        let updated = service
            .update_todo(1, "new subject".to_string(), "new desc".to_string())
            .await
            .unwrap();

        assert_eq!(updated.subject, "new subject");
        assert_eq!(updated.description, "new desc");
    }

    #[tokio::test]
    async fn test_update_row_deleted_before_reread_is_not_found() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_update_fields().returning(|_, _, _| Ok(1));
        mock_repo.expect_fetch_one().returning(|_| Ok(None));

        let service = TodoService::new(mock_repo);
        let result = service.update_todo(5, "s".to_string(), String::new()).await;

        assert!(matches!(result, Err(TodoError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_empty_ids_skips_store() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_delete_by_ids().never();

        let service = TodoService::new(mock_repo);
        assert!(service.delete_todos(vec![]).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_partial_match_succeeds() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo
            .expect_delete_by_ids()
            .with(eq(vec![1, 2, 3]))
            .times(1)
            .returning(|_| Ok(1));

        let service = TodoService::new(mock_repo);
        assert!(service.delete_todos(vec![1, 2, 3]).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_no_match_is_not_found() {
        let mut mock_repo = MockTodoRepository::new();
        mock_repo.expect_delete_by_ids().returning(|_| Ok(0));

        let service = TodoService::new(mock_repo);
        let result = service.delete_todos(vec![8, 9]).await;

        match result {
            Err(TodoError::NotFound { ids }) => assert_eq!(ids, vec![8, 9]),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
