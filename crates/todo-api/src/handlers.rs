use axum::{extract::State, http::StatusCode, Json};
use domain::{BulkDeleteReport, Todo, TodoError, TodoId, TodoInput};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{BulkDeleteResponse, HealthBody, MessageResponse};
use crate::AppState;

/// ヘルスチェック用ハンドラ
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.repo.list().await?;
    Ok(Json(todos))
}

/// POST /todos
///
/// ストア側の失敗は 500 として返す（プロセスは止めない）。
pub async fn create_todo(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TodoInput>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.repo.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/:id
pub async fn get_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.repo.get_by_id(id).await?;
    tracing::debug!(todo_id = %id, "Found match for todo");
    Ok(Json(todo))
}

/// PUT /todos/:id（title と complete の全上書き）
pub async fn update_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TodoId>,
    ApiJson(input): ApiJson<TodoInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let rows = state.repo.update_by_id(id, input).await?;
    let rows = TodoError::ensure_affected(id, rows)?;
    Ok(Json(MessageResponse::updated(rows)))
}

/// DELETE /todos/:id
pub async fn delete_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TodoId>,
) -> Result<Json<MessageResponse>, ApiError> {
    let rows = state.repo.delete_by_id(id).await?;
    let rows = TodoError::ensure_affected(id, rows)?;
    Ok(Json(MessageResponse::deleted(rows)))
}

/// DELETE /todos（本文は id の配列）
///
/// 見つからなかった id はエラーではなく結果として返す。
pub async fn delete_todos(
    State(state): State<AppState>,
    ApiJson(ids): ApiJson<Vec<TodoId>>,
) -> Result<Json<BulkDeleteResponse>, ApiError> {
    let deleted = state.repo.delete_by_ids(&ids).await?;
    let report = BulkDeleteReport::reconcile(&ids, &deleted);

    tracing::info!(
        requested = ids.len(),
        deleted = report.deleted_count,
        not_found = report.ids_not_found.len(),
        "Bulk delete completed"
    );

    Ok(Json(report.into()))
}
