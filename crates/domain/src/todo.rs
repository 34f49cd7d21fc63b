use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ストアが採番する Todo の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 永続化済みの Todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub complete: bool,
    /// ストア側で付与される。クライアントからは設定できない
    pub last_updated: DateTime<Utc>,
}

/// 作成・更新リクエストの本文
///
/// 更新は全項目の上書きなので、作成と同じ形を使う。
/// `complete` が省略された場合は `false` として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub complete: bool,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, complete: bool) -> Self {
        Self {
            title: title.into(),
            complete,
        }
    }
}
