use async_trait::async_trait;
use domain::{Todo, TodoError, TodoId, TodoInput, TodoResult};
use sqlx::PgPool;

use crate::models::TodoRow;

/// Todo の永続化を抽象化するリポジトリ
///
/// 起動時に生成して HTTP 層の状態へ注入する。どの操作も1文のオートコミットで、
/// トランザクションやリトライは行わない。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件取得（順序は保証しない）
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// 新規作成。id と last_updated はストアが付与する
    async fn create(&self, input: TodoInput) -> TodoResult<Todo>;

    async fn get_by_id(&self, id: TodoId) -> TodoResult<Todo>;

    /// title と complete を上書きし、影響行数を返す。last_updated は更新しない
    async fn update_by_id(&self, id: TodoId, input: TodoInput) -> TodoResult<u64>;

    /// 削除して影響行数を返す
    async fn delete_by_id(&self, id: TodoId) -> TodoResult<u64>;

    /// 指定 id をまとめて削除し、実際に削除された id を返す
    async fn delete_by_ids(&self, ids: &[TodoId]) -> TodoResult<Vec<TodoId>>;
}

/// PostgreSQL 実装
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn storage_error(e: sqlx::Error) -> TodoError {
    TodoError::Storage(e.to_string())
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, complete, last_updated FROM todo",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, input: TodoInput) -> TodoResult<Todo> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todo (title, complete)
            VALUES ($1, $2)
            RETURNING id, title, complete, last_updated
            "#,
        )
        .bind(&input.title)
        .bind(input.complete)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        tracing::info!(todo_id = row.id, "Created new todo");
        Ok(row.into())
    }

    async fn get_by_id(&self, id: TodoId) -> TodoResult<Todo> {
        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, complete, last_updated FROM todo WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Todo::from).ok_or(TodoError::NotFound(id))
    }

    async fn update_by_id(&self, id: TodoId, input: TodoInput) -> TodoResult<u64> {
        let result = sqlx::query("UPDATE todo SET title = $1, complete = $2 WHERE id = $3")
            .bind(&input.title)
            .bind(input.complete)
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoResult<u64> {
        let result = sqlx::query("DELETE FROM todo WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_by_ids(&self, ids: &[TodoId]) -> TodoResult<Vec<TodoId>> {
        // 配列パラメータで渡す。空配列なら何も削除されない
        let values: Vec<i64> = ids.iter().map(TodoId::value).collect();

        let deleted = sqlx::query_scalar::<_, i64>(
            "DELETE FROM todo WHERE id = ANY($1) RETURNING id",
        )
        .bind(values)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(deleted.into_iter().map(TodoId::new).collect())
    }
}
