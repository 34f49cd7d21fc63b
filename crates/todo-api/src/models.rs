use domain::BulkDeleteReport;
use serde::Serialize;

/// 更新・削除の結果メッセージ
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn updated(rows: u64) -> Self {
        Self {
            message: format!("{rows} row(s) updated"),
        }
    }

    pub fn deleted(rows: u64) -> Self {
        Self {
            message: format!("{rows} row(s) deleted"),
        }
    }
}

/// DELETE /todos レスポンス
#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub message: String,
    #[serde(flatten)]
    pub report: BulkDeleteReport,
}

impl From<BulkDeleteReport> for BulkDeleteResponse {
    fn from(report: BulkDeleteReport) -> Self {
        Self {
            message: report.message(),
            report,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    /// サービスの簡易ステータス
    pub status: &'static str,
}
