use serde::{Deserialize, Serialize};

/// 支払いサイクル
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Weekly,
    Monthly,
    Yearly,
}

/// サブスクリプションのカテゴリ
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entertainment,
    Productivity,
    Software,
    Fitness,
    Education,
    Other,
}

/// カードの表示色（プレゼンテーション用タグ）
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Blue,
    Pink,
    Yellow,
    Green,
    Purple,
    Coral,
    White,
}

/// サブスクリプションデータモデル
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub currency: String,
    pub billing_cycle: BillingCycle,
    pub category: Category,
    pub next_bill_date: chrono::NaiveDate,
    pub description: String,
    pub color: CardColor,
}

impl Subscription {
    /// 月額換算のコストを計算する
    ///
    /// # 戻り値
    /// 支払いサイクルを月額に正規化した金額
    ///
    /// # 換算規則
    /// - monthly: そのまま
    /// - yearly: 12分の1
    /// - weekly: 4倍（52/12ではなく固定の×4換算）
    pub fn monthly_equivalent_cost(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.cost,
            BillingCycle::Yearly => self.cost / 12.0,
            BillingCycle::Weekly => self.cost * 4.0,
        }
    }
}

/// サブスクリプション作成用DTO
///
/// IDはストア側で採番するため含まない
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionDto {
    pub name: String,
    pub cost: f64,
    pub currency: String,
    pub billing_cycle: BillingCycle,
    pub category: Category,
    pub next_bill_date: chrono::NaiveDate,
    #[serde(default)]
    pub description: String,
    pub color: CardColor,
}

/// サブスクリプション更新用DTO
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionDto {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub currency: Option<String>,
    pub billing_cycle: Option<BillingCycle>,
    pub category: Option<Category>,
    pub next_bill_date: Option<chrono::NaiveDate>,
    pub description: Option<String>,
    pub color: Option<CardColor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn subscription(cost: f64, cycle: BillingCycle) -> Subscription {
        Subscription {
            id: "test".to_string(),
            name: "テストサービス".to_string(),
            cost,
            currency: "USD".to_string(),
            billing_cycle: cycle,
            category: Category::Software,
            next_bill_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            description: String::new(),
            color: CardColor::Blue,
        }
    }

    #[test]
    fn test_monthly_equivalent_cost_monthly() {
        // 月払いはそのままの金額
        let sub = subscription(9.99, BillingCycle::Monthly);
        assert_eq!(sub.monthly_equivalent_cost(), 9.99);
    }

    #[test]
    fn test_monthly_equivalent_cost_yearly() {
        // 年払いは12分の1
        let sub = subscription(12.0, BillingCycle::Yearly);
        assert_eq!(sub.monthly_equivalent_cost(), 1.0);
    }

    #[test]
    fn test_monthly_equivalent_cost_weekly() {
        // 週払いは固定の×4換算
        let sub = subscription(10.0, BillingCycle::Weekly);
        assert_eq!(sub.monthly_equivalent_cost(), 40.0);
    }

    #[test]
    fn test_serde_wire_format() {
        // フロントエンドとの受け渡しはcamelCase + 小文字enum
        let sub = subscription(15.49, BillingCycle::Monthly);
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["billingCycle"], "monthly");
        assert_eq!(json["category"], "software");
        assert_eq!(json["nextBillDate"], "2025-11-01");
    }
}
