use thiserror::Error;

use crate::todo::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// リクエスト本文やパスパラメータを解釈できない
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("todo with id {0} does not exist")]
    NotFound(TodoId),

    /// ストア側の失敗。詳細はログにのみ残す
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl TodoError {
    /// 影響行数 0 を NotFound に読み替える
    pub fn ensure_affected(id: TodoId, rows: u64) -> TodoResult<u64> {
        if rows == 0 {
            Err(TodoError::NotFound(id))
        } else {
            Ok(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let error = TodoError::NotFound(TodoId::new(123));

        assert_eq!(error.to_string(), "todo with id 123 does not exist");
    }

    #[test]
    fn test_ensure_affected() {
        let id = TodoId::new(5);

        assert_eq!(TodoError::ensure_affected(id, 1), Ok(1));
        assert_eq!(
            TodoError::ensure_affected(id, 0),
            Err(TodoError::NotFound(id))
        );
    }
}
