use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    entity,
    error::{TodoError, TodoResult},
    models::Todo,
    repository::TodoRepository,
};

/// Current UTC time as SQLite renders it, with millisecond precision.
///
/// Matches the column defaults so inserted and updated timestamps share a format.
const SQLITE_NOW: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

pub struct SqliteTodoRepository {
    db: DatabaseConnection,
}

impl SqliteTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn insert(&self, subject: String, description: String) -> TodoResult<i64> {
        let active_model = entity::ActiveModel::for_insert(subject, description);

        let result = entity::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(TodoError::database("insert"))?;

        tracing::info!(todo_id = result.last_insert_id, "Inserted todo");
        Ok(result.last_insert_id)
    }

    async fn fetch_one(&self, id: i64) -> TodoResult<Option<Todo>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(TodoError::database("fetch_one"))?;

        Ok(model.map(Into::into))
    }

    async fn fetch_range(&self, after_id: Option<i64>, limit: u64) -> TodoResult<Vec<Todo>> {
        let mut query = entity::Entity::find();

        if let Some(after_id) = after_id {
            query = query.filter(entity::Column::Id.gt(after_id));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(TodoError::database("fetch_range"))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update_fields(
        &self,
        id: i64,
        subject: String,
        description: String,
    ) -> TodoResult<u64> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Subject, Expr::value(subject))
            .col_expr(entity::Column::Description, Expr::value(description))
            .col_expr(entity::Column::UpdatedAt, Expr::cust(SQLITE_NOW))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(TodoError::database("update_fields"))?;

        tracing::debug!(todo_id = id, rows_affected = result.rows_affected, "Updated todo");
        Ok(result.rows_affected)
    }

    async fn delete_by_ids(&self, ids: Vec<i64>) -> TodoResult<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::Id.is_in(ids))
            .exec(&self.db)
            .await
            .map_err(TodoError::database("delete_by_ids"))?;

        tracing::debug!(rows_affected = result.rows_affected, "Deleted todos");
        Ok(result.rows_affected)
    }
}
