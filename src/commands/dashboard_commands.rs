use crate::models::Subscription;
use crate::store::projections::{self, CalendarDay, CategoryTotal, UpcomingBill};
use crate::AppState;
use chrono::{Local, NaiveDate};
use tauri::State;

/// ダッシュボード系コマンドの基準日を取得する
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 現在のプロフィールに属するサブスクリプション一覧を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// アクティブなサブスクリプションのリスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_active_subscriptions(
    state: State<'_, AppState>,
) -> Result<Vec<Subscription>, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(projections::active_subscriptions(&store)
        .into_iter()
        .cloned()
        .collect())
}

/// アクティブなサブスクリプションの月額換算合計を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 月額合計金額、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_monthly_total(state: State<'_, AppState>) -> Result<f64, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(projections::monthly_total(&store))
}

/// カテゴリごとの月額換算合計を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// カテゴリ別合計のリスト（初出順）、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_category_totals(
    state: State<'_, AppState>,
) -> Result<Vec<CategoryTotal>, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(projections::category_totals(&store))
}

/// 月額合計が最大のカテゴリを取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 最大カテゴリ（該当なしの場合はNone）、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_top_category(
    state: State<'_, AppState>,
) -> Result<Option<CategoryTotal>, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(projections::top_category(&store))
}

/// 指定日数以内の支払い予定を取得する
///
/// # 引数
/// * `horizon_days` - 対象期間（日数）
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 残り日数昇順の支払い予定リスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_upcoming_bills(
    horizon_days: i64,
    state: State<'_, AppState>,
) -> Result<Vec<UpcomingBill>, String> {
    if horizon_days < 0 {
        return Err("対象期間は0日以上である必要があります".to_string());
    }

    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(projections::upcoming_bills(&store, today(), horizon_days))
}

/// 次に支払いが発生するサブスクリプションを取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 次の支払い予定（該当なしの場合はNone）、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_next_bill(state: State<'_, AppState>) -> Result<Option<UpcomingBill>, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(projections::next_bill(&store, today()))
}

/// 表示月の日別バケットを取得する
///
/// # 引数
/// * `year` - 表示年
/// * `month` - 表示月（1〜12）
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 日別バケットのリスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_calendar_month(
    year: i32,
    month: u32,
    state: State<'_, AppState>,
) -> Result<Vec<CalendarDay>, String> {
    // バリデーション: 月は1〜12
    if !(1..=12).contains(&month) {
        return Err("月は1から12の範囲で指定してください".to_string());
    }

    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(projections::calendar_month(&store, year, month))
}
