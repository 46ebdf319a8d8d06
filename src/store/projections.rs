use super::AppStore;
use crate::models::{Category, Subscription};
use chrono::NaiveDate;
use serde::Serialize;

/// カテゴリごとの月額合計
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// 支払い予定（残り日数付きのサブスクリプション）
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBill {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub days_until: i64,
}

/// カレンダーの1日分のバケット
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day: u32,
    pub subscriptions: Vec<Subscription>,
}

/// 現在のプロフィールに属するサブスクリプションを取得する
///
/// メンバーシップとコレクションのID結合。順序はコレクションの挿入順。
/// 実在しないIDへの参照（ぶら下がり参照）はここで黙って除外される。
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// アクティブなサブスクリプションへの参照リスト
pub fn active_subscriptions(store: &AppStore) -> Vec<&Subscription> {
    let Some(profile) = store.current_profile() else {
        return Vec::new();
    };
    store
        .subscriptions()
        .iter()
        .filter(|sub| profile.contains_subscription(&sub.id))
        .collect()
}

/// アクティブなサブスクリプションの月額換算合計を計算する
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// 月額合計金額
pub fn monthly_total(store: &AppStore) -> f64 {
    active_subscriptions(store)
        .iter()
        .map(|sub| sub.monthly_equivalent_cost())
        .sum()
}

/// カテゴリごとの月額換算合計を計算する
///
/// グループの順序はアクティブリスト内での初出順（決定的）。
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// カテゴリ別の合計リスト
pub fn category_totals(store: &AppStore) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for sub in active_subscriptions(store) {
        let monthly = sub.monthly_equivalent_cost();
        match totals.iter_mut().find(|t| t.category == sub.category) {
            Some(entry) => entry.total += monthly,
            None => totals.push(CategoryTotal {
                category: sub.category,
                total: monthly,
            }),
        }
    }
    totals
}

/// 月額合計が最大のカテゴリを取得する
///
/// 同額の場合は初出が早いカテゴリが勝つ（タイブレークは初出順）。
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// 最大カテゴリ、アクティブなサブスクリプションが無い場合はNone
pub fn top_category(store: &AppStore) -> Option<CategoryTotal> {
    category_totals(store)
        .into_iter()
        .fold(None, |best, current| match best {
            Some(b) if current.total > b.total => Some(current),
            Some(b) => Some(b),
            None => Some(current),
        })
}

/// 指定日数以内の支払い予定を取得する
///
/// `days_until = nextBillDate - today`（暦日単位）で計算し、
/// `0 <= days_until <= horizon_days` のものを残り日数の昇順で返す。
/// 支払期日を過ぎたもの（days_until < 0）はこの射影には現れない。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `today` - 基準日
/// * `horizon_days` - 対象期間（日数）
///
/// # 戻り値
/// 残り日数昇順の支払い予定リスト
pub fn upcoming_bills(store: &AppStore, today: NaiveDate, horizon_days: i64) -> Vec<UpcomingBill> {
    let mut bills: Vec<UpcomingBill> = active_subscriptions(store)
        .into_iter()
        .filter_map(|sub| {
            let days_until = (sub.next_bill_date - today).num_days();
            if (0..=horizon_days).contains(&days_until) {
                Some(UpcomingBill {
                    subscription: sub.clone(),
                    days_until,
                })
            } else {
                None
            }
        })
        .collect();

    // 安定ソートのため、同日ならコレクションの挿入順が保たれる
    bills.sort_by_key(|bill| bill.days_until);
    bills
}

/// 次に支払いが発生するサブスクリプションを取得する
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `today` - 基準日
///
/// # 戻り値
/// 残り日数が最小（かつ0以上）の支払い予定、該当なしの場合はNone
pub fn next_bill(store: &AppStore, today: NaiveDate) -> Option<UpcomingBill> {
    active_subscriptions(store)
        .into_iter()
        .filter_map(|sub| {
            let days_until = (sub.next_bill_date - today).num_days();
            if days_until >= 0 {
                Some(UpcomingBill {
                    subscription: sub.clone(),
                    days_until,
                })
            } else {
                None
            }
        })
        .min_by_key(|bill| bill.days_until)
}

/// 表示月の日別バケットを計算する
///
/// 各サブスクリプションは保存されている単一の`nextBillDate`の日にのみ
/// 現れる。同月内の繰り返し発生分は合成しない。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `year` - 表示年
/// * `month` - 表示月（1〜12）
///
/// # 戻り値
/// 1日から月末までの日別バケットリスト
pub fn calendar_month(store: &AppStore, year: i32, month: u32) -> Vec<CalendarDay> {
    let active = active_subscriptions(store);
    (1..=days_in_month(year, month))
        .map(|day| {
            let date = NaiveDate::from_ymd_opt(year, month, day);
            let subscriptions = active
                .iter()
                .filter(|sub| Some(sub.next_bill_date) == date)
                .map(|sub| (*sub).clone())
                .collect();
            CalendarDay { day, subscriptions }
        })
        .collect()
}

/// 指定した年月の日数を取得する
///
/// 無効な月の場合は0を返す
fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next_first) => (next_first - first).num_days() as u32,
        None => 0,
    }
}
