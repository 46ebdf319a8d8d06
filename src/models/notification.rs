use serde::{Deserialize, Serialize};

/// 通知の種別
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Payment,
    Insight,
    Reminder,
}

/// 通知データモデル
///
/// `read` は false -> true の一方向にのみ変化する。
/// 未読へ戻す操作は存在しない。
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub date: chrono::NaiveDate,
    pub read: bool,
}
