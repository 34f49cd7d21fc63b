use async_trait::async_trait;
use chrono::Utc;
use domain::{Todo, TodoError, TodoId, TodoInput, TodoResult};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::repositories::TodoRepository;

/// 簡易な InMemory 実装（開発/テスト用）
///
/// id は 1 から順に採番する。削除済みの id は再利用しない。
#[derive(Default)]
pub struct InMemoryTodoRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    todos: BTreeMap<TodoId, Todo>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在保持している件数
    pub async fn len(&self) -> usize {
        self.state.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        Ok(self.state.read().await.todos.values().cloned().collect())
    }

    async fn create(&self, input: TodoInput) -> TodoResult<Todo> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let todo = Todo {
            id: TodoId::new(state.last_id),
            title: input.title,
            complete: input.complete,
            last_updated: Utc::now(),
        };
        state.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get_by_id(&self, id: TodoId) -> TodoResult<Todo> {
        self.state
            .read()
            .await
            .todos
            .get(&id)
            .cloned()
            .ok_or(TodoError::NotFound(id))
    }

    async fn update_by_id(&self, id: TodoId, input: TodoInput) -> TodoResult<u64> {
        let mut state = self.state.write().await;
        match state.todos.get_mut(&id) {
            Some(todo) => {
                todo.title = input.title;
                todo.complete = input.complete;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoResult<u64> {
        let removed = self.state.write().await.todos.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn delete_by_ids(&self, ids: &[TodoId]) -> TodoResult<Vec<TodoId>> {
        let mut state = self.state.write().await;
        // 重複 id は最初の1回だけ削除される（RETURNING と同じ振る舞い）
        Ok(ids
            .iter()
            .filter_map(|id| state.todos.remove(id).map(|todo| todo.id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryTodoRepository::new();

        let first = repo.create(TodoInput::new("A", false)).await.unwrap();
        let second = repo.create(TodoInput::new("B", true)).await.unwrap();

        assert_eq!(first.id, TodoId::new(1));
        assert_eq!(second.id, TodoId::new(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_update_keeps_last_updated() {
        // Arrange
        let repo = InMemoryTodoRepository::new();
        let created = repo.create(TodoInput::new("Old", false)).await.unwrap();

        // Act
        let rows = repo
            .update_by_id(created.id, TodoInput::new("New", true))
            .await
            .unwrap();

        // Assert
        let updated = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(rows, 1);
        assert_eq!(updated.title, "New");
        assert!(updated.complete);
        assert_eq!(updated.last_updated, created.last_updated);
    }

    #[tokio::test]
    async fn test_missing_rows_report_zero_affected() {
        let repo = InMemoryTodoRepository::new();
        let id = TodoId::new(99);

        assert_eq!(repo.update_by_id(id, TodoInput::new("x", false)).await, Ok(0));
        assert_eq!(repo.delete_by_id(id).await, Ok(0));
        assert_eq!(repo.get_by_id(id).await, Err(TodoError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_delete_by_ids_returns_each_deleted_id_once() {
        // Arrange
        let repo = InMemoryTodoRepository::new();
        for title in ["a", "b", "c"] {
            repo.create(TodoInput::new(title, false)).await.unwrap();
        }
        let requested: Vec<TodoId> = [1, 2, 4, 4, 1].into_iter().map(TodoId::new).collect();

        // Act
        let deleted = repo.delete_by_ids(&requested).await.unwrap();

        // Assert
        assert_eq!(deleted, vec![TodoId::new(1), TodoId::new(2)]);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_by_ids_with_empty_input_deletes_nothing() {
        let repo = InMemoryTodoRepository::new();
        repo.create(TodoInput::new("keep", false)).await.unwrap();

        let deleted = repo.delete_by_ids(&[]).await.unwrap();

        assert!(deleted.is_empty());
        assert!(!repo.is_empty().await);
    }
}
