use crate::models::{
    BillingCycle, CardColor, Category, Notification, NotificationType, Profile, ProfileType,
    Subscription,
};
use chrono::NaiveDate;

/// 日付リテラルを安全に組み立てる
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // シードデータの日付は固定値のため常に有効
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// シードのサブスクリプション一覧を取得する
///
/// # 戻り値
/// アプリ起動時に投入される固定のサブスクリプション群
pub fn seed_subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: "1".to_string(),
            name: "Spotify Premium".to_string(),
            cost: 10.99,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Entertainment,
            next_bill_date: date(2025, 11, 5),
            description: "Music streaming service".to_string(),
            color: CardColor::Green,
        },
        Subscription {
            id: "2".to_string(),
            name: "Netflix Standard".to_string(),
            cost: 15.49,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Entertainment,
            next_bill_date: date(2025, 10, 23),
            description: "Video streaming platform".to_string(),
            color: CardColor::Coral,
        },
        Subscription {
            id: "3".to_string(),
            name: "Adobe Creative Cloud".to_string(),
            cost: 54.99,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Software,
            next_bill_date: date(2025, 11, 12),
            description: "Design and creative tools".to_string(),
            color: CardColor::Pink,
        },
        Subscription {
            id: "4".to_string(),
            name: "Figma Professional".to_string(),
            cost: 15.00,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Productivity,
            next_bill_date: date(2025, 10, 28),
            description: "Design collaboration platform".to_string(),
            color: CardColor::Purple,
        },
        Subscription {
            id: "5".to_string(),
            name: "YouTube Premium".to_string(),
            cost: 11.99,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Entertainment,
            next_bill_date: date(2025, 11, 1),
            description: "Ad-free video streaming".to_string(),
            color: CardColor::Coral,
        },
        Subscription {
            id: "6".to_string(),
            name: "GitHub Pro".to_string(),
            cost: 4.00,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Software,
            next_bill_date: date(2025, 11, 8),
            description: "Code hosting platform".to_string(),
            color: CardColor::Blue,
        },
        Subscription {
            id: "7".to_string(),
            name: "Notion Plus".to_string(),
            cost: 10.00,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Productivity,
            next_bill_date: date(2025, 10, 25),
            description: "Workspace and notes".to_string(),
            color: CardColor::Yellow,
        },
    ]
}

/// シードのプロフィール一覧を取得する
///
/// 先頭のプロフィールが起動直後の選択プロフィールになる
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "1".to_string(),
            name: "Alex's Finances".to_string(),
            profile_type: ProfileType::Personal,
            subscriptions: vec!["1", "2", "3", "4", "5", "6", "7"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
        Profile {
            id: "2".to_string(),
            name: "Family Shared".to_string(),
            profile_type: ProfileType::Family,
            subscriptions: vec!["2".to_string(), "5".to_string()],
        },
    ]
}

/// シードの通知一覧を取得する
pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            notification_type: NotificationType::Payment,
            title: "Upcoming Payment".to_string(),
            message: "Netflix Standard payment of $15.49 due in 3 days".to_string(),
            date: date(2025, 10, 20),
            read: false,
        },
        Notification {
            id: "2".to_string(),
            notification_type: NotificationType::Insight,
            title: "AI Insight".to_string(),
            message: "Your Software spending has increased by 15% this month".to_string(),
            date: date(2025, 10, 19),
            read: false,
        },
        Notification {
            id: "3".to_string(),
            notification_type: NotificationType::Reminder,
            title: "Review Subscriptions".to_string(),
            message: "You haven't used Figma in 30 days".to_string(),
            date: date(2025, 10, 18),
            read: true,
        },
        Notification {
            id: "4".to_string(),
            notification_type: NotificationType::Payment,
            title: "Payment Processed".to_string(),
            message: "Spotify Premium payment of $10.99 was successful".to_string(),
            date: date(2025, 10, 15),
            read: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        // シード内のIDは一意であること
        let subscriptions = seed_subscriptions();
        let mut ids: Vec<&str> = subscriptions.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), subscriptions.len());
    }

    #[test]
    fn test_seed_profile_references_exist() {
        // プロフィールのメンバーシップはすべて実在するサブスクリプションを指す
        let subscriptions = seed_subscriptions();
        for profile in seed_profiles() {
            for id in &profile.subscriptions {
                assert!(
                    subscriptions.iter().any(|s| &s.id == id),
                    "プロフィール{}が存在しないID {}を参照しています",
                    profile.id,
                    id
                );
            }
        }
    }

    #[test]
    fn test_seed_costs_are_non_negative() {
        // cost >= 0 の不変条件
        for subscription in seed_subscriptions() {
            assert!(subscription.cost >= 0.0);
        }
    }
}
