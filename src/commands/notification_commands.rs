use crate::models::Notification;
use crate::store::notification_operations;
use crate::AppState;
use tauri::State;

/// 通知一覧を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 通知のリスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_notifications(state: State<'_, AppState>) -> Result<Vec<Notification>, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(notification_operations::find_all(&store))
}

/// 通知を既読にする
///
/// # 引数
/// * `id` - 通知ID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 既読化した通知、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn mark_notification_read(
    id: String,
    state: State<'_, AppState>,
) -> Result<Notification, String> {
    let mut store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    notification_operations::mark_read(&mut store, &id).map_err(String::from)
}

/// 未読の通知数を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 未読の件数、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_unread_notification_count(state: State<'_, AppState>) -> Result<usize, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(notification_operations::unread_count(&store))
}
