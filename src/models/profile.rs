use serde::{Deserialize, Serialize};

/// プロフィールの種別
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Personal,
    Family,
    Group,
}

/// プロフィールデータモデル
///
/// サブスクリプションをID参照でグループ化する単位。
/// `subscriptions` には存在しないIDが残ることがある（削除後のぶら下がり参照）。
/// 読み取り側の結合で黙って除外される想定。
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub subscriptions: Vec<String>,
}

impl Profile {
    /// 指定したサブスクリプションIDがこのプロフィールに含まれるか
    pub fn contains_subscription(&self, subscription_id: &str) -> bool {
        self.subscriptions.iter().any(|id| id == subscription_id)
    }
}
