//! 一括削除の結果突き合わせ
//!
//! `DELETE ... RETURNING id` で実際に消えた id と、リクエストされた id を
//! 突き合わせて、見つからなかった id を報告する。

use serde::Serialize;
use std::collections::HashSet;

use crate::todo::TodoId;

/// 一括削除の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDeleteReport {
    /// 実際に削除された行数（重複しない id の数）
    pub deleted_count: usize,
    /// 削除対象が存在しなかった id。入力順・重複はそのまま保持する
    pub ids_not_found: Vec<TodoId>,
}

impl BulkDeleteReport {
    /// リクエストされた id と削除済み id から結果を組み立てる
    ///
    /// 削除済み id の重複は1件として数える。見つからなかった id は
    /// 追加の問い合わせをせず、削除済み集合への所属で判定する。
    pub fn reconcile(requested: &[TodoId], deleted: &[TodoId]) -> Self {
        let deleted: HashSet<TodoId> = deleted.iter().copied().collect();

        let ids_not_found = requested
            .iter()
            .copied()
            .filter(|id| !deleted.contains(id))
            .collect();

        Self {
            deleted_count: deleted.len(),
            ids_not_found,
        }
    }

    pub fn message(&self) -> String {
        format!("{} todos deleted", self.deleted_count)
    }
}
