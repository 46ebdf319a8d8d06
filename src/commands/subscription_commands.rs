use crate::models::{CreateSubscriptionDto, Subscription, UpdateSubscriptionDto};
use crate::store::subscription_operations;
use crate::AppState;
use tauri::State;

/// サブスクリプションを作成する
///
/// # 引数
/// * `dto` - サブスクリプション作成用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 作成されたサブスクリプション、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn create_subscription(
    dto: CreateSubscriptionDto,
    state: State<'_, AppState>,
) -> Result<Subscription, String> {
    let mut store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    subscription_operations::create(&mut store, dto).map_err(String::from)
}

/// サブスクリプション一覧を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// サブスクリプションのリスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_subscriptions(state: State<'_, AppState>) -> Result<Vec<Subscription>, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(subscription_operations::find_all(&store))
}

/// IDでサブスクリプションを取得する
///
/// # 引数
/// * `id` - サブスクリプションID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// サブスクリプション、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_subscription(
    id: String,
    state: State<'_, AppState>,
) -> Result<Subscription, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    subscription_operations::find_by_id(&store, &id).map_err(String::from)
}

/// サブスクリプションを部分更新する
///
/// # 引数
/// * `id` - サブスクリプションID
/// * `dto` - サブスクリプション更新用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新されたサブスクリプション、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn update_subscription(
    id: String,
    dto: UpdateSubscriptionDto,
    state: State<'_, AppState>,
) -> Result<Subscription, String> {
    let mut store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    subscription_operations::update(&mut store, &id, dto).map_err(String::from)
}

/// サブスクリプションを削除する
///
/// コレクションからのみ削除する。現在のプロフィールのメンバーシップから
/// 外すには `remove_subscription_from_profile` を別途呼ぶこと。
///
/// # 引数
/// * `id` - サブスクリプションID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラーメッセージ
#[tauri::command]
pub async fn delete_subscription(id: String, state: State<'_, AppState>) -> Result<(), String> {
    let mut store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    subscription_operations::delete(&mut store, &id).map_err(String::from)
}
