use super::AppStore;
use crate::models::Notification;
use crate::shared::errors::{AppError, AppResult};

/// 通知一覧を挿入順で取得する
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// 通知のリスト
pub fn find_all(store: &AppStore) -> Vec<Notification> {
    store.notifications.to_vec()
}

/// 通知を既読にする
///
/// `read` は一方向にのみ変化する。未読へ戻す操作は存在しない。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `id` - 通知ID
///
/// # 戻り値
/// 既読化した通知、または見つからない場合はエラー
pub fn mark_read(store: &mut AppStore, id: &str) -> AppResult<Notification> {
    let notification = store
        .notifications
        .get_mut(id)
        .ok_or_else(|| AppError::not_found(format!("ID {id} の通知")))?;

    notification.read = true;
    Ok(notification.clone())
}

/// 未読の通知数を取得する
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// 未読の件数
pub fn unread_count(store: &AppStore) -> usize {
    store.notifications.iter().filter(|n| !n.read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::initialize_store;

    #[test]
    fn test_mark_read() {
        let mut store = initialize_store();
        let notification = mark_read(&mut store, "1").unwrap();
        assert!(notification.read);
        assert!(store.notifications().get("1").unwrap().read);
    }

    #[test]
    fn test_mark_read_is_monotonic() {
        // 二度呼んでも既読のまま（false へ戻る経路は無い）
        let mut store = initialize_store();
        mark_read(&mut store, "1").unwrap();
        let again = mark_read(&mut store, "1").unwrap();
        assert!(again.read);
    }

    #[test]
    fn test_mark_read_not_found() {
        let mut store = initialize_store();
        assert!(matches!(
            mark_read(&mut store, "missing"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_unread_count() {
        // シードでは4件中2件が未読
        let mut store = initialize_store();
        assert_eq!(unread_count(&store), 2);

        mark_read(&mut store, "1").unwrap();
        assert_eq!(unread_count(&store), 1);
    }
}
