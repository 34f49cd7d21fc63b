use chrono::{DateTime, Utc};
use domain::{Todo, TodoId};
use sqlx::FromRow;

/// `todo` テーブルの1行
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub complete: bool,
    pub last_updated: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::new(row.id),
            title: row.title,
            complete: row.complete,
            last_updated: row.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_domain_conversion() {
        // Arrange
        let now = Utc::now();
        let row = TodoRow {
            id: 3,
            title: "Walk dog".to_string(),
            complete: true,
            last_updated: now,
        };

        // Act
        let todo: Todo = row.into();

        // Assert
        assert_eq!(todo.id, TodoId::new(3));
        assert_eq!(todo.title, "Walk dog");
        assert!(todo.complete);
        assert_eq!(todo.last_updated, now);
    }
}
