use super::AppStore;
use crate::models::Profile;
use crate::shared::errors::{AppError, AppResult};

/// プロフィール一覧を挿入順で取得する
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// プロフィールのリスト
pub fn find_all(store: &AppStore) -> Vec<Profile> {
    store.profiles.to_vec()
}

/// IDでプロフィールを取得する
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `id` - プロフィールID
///
/// # 戻り値
/// プロフィール、または見つからない場合はエラー
pub fn find_by_id(store: &AppStore, id: &str) -> AppResult<Profile> {
    store
        .profiles
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("ID {id} のプロフィール")))
}

/// 現在選択中のプロフィールを取得する
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// 現在のプロフィール、または選択が無効な場合はエラー
pub fn current(store: &AppStore) -> AppResult<Profile> {
    store
        .current_profile()
        .cloned()
        .ok_or_else(|| AppError::not_found("現在のプロフィール"))
}

/// 選択中のプロフィールを切り替える
///
/// 切り替え先がコレクションに存在することを検証する。
/// ストレージは変更されず、以後の派生ビューの結果だけが変わる。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `id` - 切り替え先のプロフィールID
///
/// # 戻り値
/// 切り替え後のプロフィール、または失敗時はエラー
pub fn set_current(store: &mut AppStore, id: &str) -> AppResult<Profile> {
    let profile = store
        .profiles
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("ID {id} のプロフィール")))?;

    store.current_profile_id = profile.id.clone();
    Ok(profile)
}

/// 現在のプロフィールのメンバーシップからサブスクリプションIDを外す
///
/// サブスクリプション削除の二段階目。新しいプロフィール値を作って
/// コレクション内で置き換える（共有配列のインプレース変更はしない）。
/// IDがメンバーシップに無い場合は何もしない。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `subscription_id` - 外すサブスクリプションID
///
/// # 戻り値
/// 更新後のプロフィール、または失敗時はエラー
pub fn remove_subscription_from_current(
    store: &mut AppStore,
    subscription_id: &str,
) -> AppResult<Profile> {
    let profile = store
        .current_profile()
        .cloned()
        .ok_or_else(|| AppError::not_found("現在のプロフィール"))?;

    let mut updated = profile;
    updated.subscriptions.retain(|id| id != subscription_id);
    let profile_id = updated.id.clone();
    let _ = store.profiles.replace(&profile_id, updated.clone());

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::initialize_store;

    #[test]
    fn test_find_by_id_returns_profile() {
        let store = initialize_store();
        let found = find_by_id(&store, "2").unwrap();
        assert_eq!(found.name, "Family Shared");
    }

    #[test]
    fn test_find_by_id_not_found() {
        // 存在しないIDは明示的なNotFound
        let store = initialize_store();
        assert!(matches!(
            find_by_id(&store, "99"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_set_current_switches_profile() {
        let mut store = initialize_store();
        let profile = set_current(&mut store, "2").unwrap();

        assert_eq!(profile.name, "Family Shared");
        assert_eq!(store.current_profile_id(), "2");
    }

    #[test]
    fn test_set_current_validates_existence() {
        // 存在しないプロフィールへの切り替えは拒否され、選択は変わらない
        let mut store = initialize_store();
        assert!(matches!(
            set_current(&mut store, "99"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.current_profile_id(), "1");
    }

    #[test]
    fn test_set_current_does_not_change_subscriptions() {
        // プロフィール切り替えは射影にのみ影響し、ストレージは不変
        let mut store = initialize_store();
        let before = crate::store::subscription_operations::find_all(&store);

        set_current(&mut store, "2").unwrap();

        let after = crate::store::subscription_operations::find_all(&store);
        let before_ids: Vec<&str> = before.iter().map(|s| s.id.as_str()).collect();
        let after_ids: Vec<&str> = after.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(before_ids, after_ids);
    }

    #[test]
    fn test_remove_subscription_from_current() {
        let mut store = initialize_store();
        let updated = remove_subscription_from_current(&mut store, "3").unwrap();

        assert!(!updated.contains_subscription("3"));
        assert!(!store
            .current_profile()
            .unwrap()
            .contains_subscription("3"));
        // コレクション側のレコード自体は残る
        assert!(store.subscriptions().contains("3"));
    }

    #[test]
    fn test_remove_missing_subscription_is_noop() {
        // メンバーシップに無いIDを外しても何も起きない
        let mut store = initialize_store();
        let before = current(&store).unwrap().subscriptions.len();
        let updated = remove_subscription_from_current(&mut store, "missing").unwrap();
        assert_eq!(updated.subscriptions.len(), before);
    }
}
