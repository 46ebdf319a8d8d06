use crate::models::Profile;
use crate::store::profile_operations;
use crate::AppState;
use tauri::State;

/// プロフィール一覧を取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// プロフィールのリスト、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_profiles(state: State<'_, AppState>) -> Result<Vec<Profile>, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    Ok(profile_operations::find_all(&store))
}

/// IDでプロフィールを取得する
///
/// # 引数
/// * `id` - プロフィールID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// プロフィール、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_profile(id: String, state: State<'_, AppState>) -> Result<Profile, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    profile_operations::find_by_id(&store, &id).map_err(String::from)
}

/// 現在選択中のプロフィールを取得する
///
/// # 引数
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 現在のプロフィール、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn get_current_profile(state: State<'_, AppState>) -> Result<Profile, String> {
    let store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    profile_operations::current(&store).map_err(String::from)
}

/// 選択中のプロフィールを切り替える
///
/// # 引数
/// * `id` - 切り替え先のプロフィールID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 切り替え後のプロフィール、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn set_current_profile(
    id: String,
    state: State<'_, AppState>,
) -> Result<Profile, String> {
    let mut store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    profile_operations::set_current(&mut store, &id).map_err(String::from)
}

/// 現在のプロフィールのメンバーシップからサブスクリプションIDを外す
///
/// サブスクリプション削除の二段階目として呼ばれる。
///
/// # 引数
/// * `subscription_id` - 外すサブスクリプションID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新後のプロフィール、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn remove_subscription_from_profile(
    subscription_id: String,
    state: State<'_, AppState>,
) -> Result<Profile, String> {
    let mut store = state
        .store
        .lock()
        .map_err(|e| format!("ストアロックエラー: {}", e))?;

    profile_operations::remove_subscription_from_current(&mut store, &subscription_id)
        .map_err(String::from)
}
