pub mod notification_operations;
pub mod profile_operations;
pub mod projections;
pub mod seed;
pub mod subscription_operations;

use crate::models::{Notification, Profile, Subscription};
use std::collections::HashMap;

/// IDをキーとする順序付きコレクション
///
/// IDの一意性とO(1)ルックアップをマップで保証しつつ、
/// 表示用の挿入順をキーリストで別途保持する。
#[derive(Debug)]
pub struct IdCollection<T> {
    items: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> IdCollection<T> {
    /// 空のコレクションを作成する
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// 要素数を取得する
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// コレクションが空かどうか
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 指定IDの要素が存在するか
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// 要素を末尾に追加する
    ///
    /// # 戻り値
    /// 追加できた場合はtrue、同一IDが既に存在する場合はfalse
    pub fn insert(&mut self, id: String, item: T) -> bool {
        if self.items.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.items.insert(id, item);
        true
    }

    /// 指定IDの要素への参照を取得する
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// 指定IDの要素への可変参照を取得する
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    /// 指定IDの要素を挿入順を保ったまま置き換える
    ///
    /// # 戻り値
    /// 置き換え前の要素、IDが存在しない場合はNone
    pub fn replace(&mut self, id: &str, item: T) -> Option<T> {
        self.items.get_mut(id).map(|slot| std::mem::replace(slot, item))
    }

    /// 指定IDの要素を削除する
    ///
    /// # 戻り値
    /// 削除した要素、IDが存在しない場合はNone
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.items.remove(id)?;
        self.order.retain(|key| key != id);
        Some(removed)
    }

    /// 挿入順で要素を走査する
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }
}

impl<T: Clone> IdCollection<T> {
    /// 挿入順の要素リストを複製して取得する
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for IdCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// アプリケーションストア
///
/// サブスクリプション・プロフィール・通知の正規コレクションと、
/// 現在選択中のプロフィールIDを保持する唯一の所有者。
/// Tauriのマネージドステート内で`Mutex`に包んで共有するため、
/// 変更操作はロック取得順に全順序で適用される。
#[derive(Debug)]
pub struct AppStore {
    pub(crate) subscriptions: IdCollection<Subscription>,
    pub(crate) profiles: IdCollection<Profile>,
    pub(crate) notifications: IdCollection<Notification>,
    pub(crate) current_profile_id: String,
}

impl AppStore {
    /// 空のストアを作成する（テスト用途）
    pub fn empty() -> Self {
        Self {
            subscriptions: IdCollection::new(),
            profiles: IdCollection::new(),
            notifications: IdCollection::new(),
            current_profile_id: String::new(),
        }
    }

    /// 現在選択中のプロフィールを取得する
    ///
    /// 選択IDがコレクションに存在しない場合はNone
    pub fn current_profile(&self) -> Option<&Profile> {
        self.profiles.get(&self.current_profile_id)
    }

    /// 現在選択中のプロフィールIDを取得する
    pub fn current_profile_id(&self) -> &str {
        &self.current_profile_id
    }

    /// サブスクリプションコレクションへの参照を取得する
    pub fn subscriptions(&self) -> &IdCollection<Subscription> {
        &self.subscriptions
    }

    /// プロフィールコレクションへの参照を取得する
    pub fn profiles(&self) -> &IdCollection<Profile> {
        &self.profiles
    }

    /// 通知コレクションへの参照を取得する
    pub fn notifications(&self) -> &IdCollection<Notification> {
        &self.notifications
    }
}

/// シードデータからストアを初期化する
///
/// アプリ起動のたびにこの固定セットへ戻る（永続化は行わない）。
/// 初期の選択プロフィールはシードの先頭プロフィール。
///
/// # 戻り値
/// 初期化済みのアプリケーションストア
pub fn initialize_store() -> AppStore {
    let mut store = AppStore::empty();

    for subscription in seed::seed_subscriptions() {
        store
            .subscriptions
            .insert(subscription.id.clone(), subscription);
    }

    let mut first_profile_id = String::new();
    for profile in seed::seed_profiles() {
        if first_profile_id.is_empty() {
            first_profile_id = profile.id.clone();
        }
        store.profiles.insert(profile.id.clone(), profile);
    }
    store.current_profile_id = first_profile_id;

    for notification in seed::seed_notifications() {
        store
            .notifications
            .insert(notification.id.clone(), notification);
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_collection_preserves_insertion_order() {
        // 挿入順が走査順に反映されることをテスト
        let mut collection = IdCollection::new();
        assert!(collection.insert("b".to_string(), 2));
        assert!(collection.insert("a".to_string(), 1));
        assert!(collection.insert("c".to_string(), 3));

        let values: Vec<i32> = collection.iter().copied().collect();
        assert_eq!(values, vec![2, 1, 3]);
    }

    #[test]
    fn test_id_collection_rejects_duplicate_id() {
        // 同一IDの二重挿入は拒否される
        let mut collection = IdCollection::new();
        assert!(collection.insert("1".to_string(), "first"));
        assert!(!collection.insert("1".to_string(), "second"));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("1"), Some(&"first"));
    }

    #[test]
    fn test_id_collection_remove() {
        // 削除後は走査からも消える
        let mut collection = IdCollection::new();
        collection.insert("1".to_string(), 10);
        collection.insert("2".to_string(), 20);

        assert_eq!(collection.remove("1"), Some(10));
        assert_eq!(collection.remove("1"), None);
        let values: Vec<i32> = collection.iter().copied().collect();
        assert_eq!(values, vec![20]);
    }

    #[test]
    fn test_id_collection_replace_keeps_order() {
        // 置き換えでは挿入順が変わらない
        let mut collection = IdCollection::new();
        collection.insert("1".to_string(), 10);
        collection.insert("2".to_string(), 20);

        assert_eq!(collection.replace("1", 11), Some(10));
        assert_eq!(collection.replace("9", 99), None);
        let values: Vec<i32> = collection.iter().copied().collect();
        assert_eq!(values, vec![11, 20]);
    }

    #[test]
    fn test_initialize_store_seeds_collections() {
        // シードデータが投入され、先頭プロフィールが選択される
        let store = initialize_store();
        assert_eq!(store.subscriptions().len(), 7);
        assert_eq!(store.profiles().len(), 2);
        assert_eq!(store.notifications().len(), 4);
        assert_eq!(store.current_profile_id(), "1");
        assert!(store.current_profile().is_some());
    }
}
