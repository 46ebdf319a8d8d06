use super::AppStore;
use crate::models::{CreateSubscriptionDto, Subscription, UpdateSubscriptionDto};
use crate::shared::errors::{AppError, AppResult};
use uuid::Uuid;

/// サブスクリプション名を検証する
fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("名前は空にできません"));
    }
    Ok(())
}

/// 金額を検証する（cost >= 0 の不変条件）
fn validate_cost(cost: f64) -> AppResult<()> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(AppError::validation("金額は0以上の数値である必要があります"));
    }
    Ok(())
}

/// サブスクリプションを作成する
///
/// IDはストアが採番する。作成と同時に、現在選択中のプロフィールの
/// メンバーシップへ追加する（新しいプロフィール値を作って置き換える）。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `dto` - サブスクリプション作成用DTO
///
/// # 戻り値
/// 作成されたサブスクリプション、または失敗時はエラー
pub fn create(store: &mut AppStore, dto: CreateSubscriptionDto) -> AppResult<Subscription> {
    validate_name(&dto.name)?;
    validate_cost(dto.cost)?;

    let id = Uuid::new_v4().to_string();
    let subscription = Subscription {
        id: id.clone(),
        name: dto.name,
        cost: dto.cost,
        currency: dto.currency,
        billing_cycle: dto.billing_cycle,
        category: dto.category,
        next_bill_date: dto.next_bill_date,
        description: dto.description,
        color: dto.color,
    };

    if !store.subscriptions.insert(id.clone(), subscription.clone()) {
        return Err(AppError::validation(format!(
            "ID {id} のサブスクリプションは既に存在します"
        )));
    }

    // 現在のプロフィールへ追加（メンバーシップは値セマンティクスで更新）
    let current = store.current_profile().cloned();
    if let Some(profile) = current {
        if !profile.contains_subscription(&id) {
            let mut updated = profile;
            updated.subscriptions.push(id);
            let profile_id = updated.id.clone();
            let _ = store.profiles.replace(&profile_id, updated);
        }
    }

    Ok(subscription)
}

/// サブスクリプション一覧を挿入順で取得する
///
/// # 引数
/// * `store` - アプリケーションストア
///
/// # 戻り値
/// サブスクリプションのリスト
pub fn find_all(store: &AppStore) -> Vec<Subscription> {
    store.subscriptions.to_vec()
}

/// IDでサブスクリプションを取得する
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `id` - サブスクリプションID
///
/// # 戻り値
/// サブスクリプション、または見つからない場合はエラー
pub fn find_by_id(store: &AppStore, id: &str) -> AppResult<Subscription> {
    store
        .subscriptions
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("ID {id} のサブスクリプション")))
}

/// サブスクリプションを部分更新する
///
/// 指定されたフィールドのみを置き換え、その他は既存値を保持する。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `id` - サブスクリプションID
/// * `dto` - サブスクリプション更新用DTO
///
/// # 戻り値
/// 更新後のサブスクリプション、または失敗時はエラー
pub fn update(
    store: &mut AppStore,
    id: &str,
    dto: UpdateSubscriptionDto,
) -> AppResult<Subscription> {
    if let Some(ref name) = dto.name {
        validate_name(name)?;
    }
    if let Some(cost) = dto.cost {
        validate_cost(cost)?;
    }

    let existing = store
        .subscriptions
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("ID {id} のサブスクリプション")))?;

    let updated = Subscription {
        id: existing.id.clone(),
        name: dto.name.unwrap_or_else(|| existing.name.clone()),
        cost: dto.cost.unwrap_or(existing.cost),
        currency: dto.currency.unwrap_or_else(|| existing.currency.clone()),
        billing_cycle: dto.billing_cycle.unwrap_or(existing.billing_cycle),
        category: dto.category.unwrap_or(existing.category),
        next_bill_date: dto.next_bill_date.unwrap_or(existing.next_bill_date),
        description: dto
            .description
            .unwrap_or_else(|| existing.description.clone()),
        color: dto.color.unwrap_or(existing.color),
    };

    let _ = store.subscriptions.replace(id, updated.clone());
    Ok(updated)
}

/// サブスクリプションを削除する
///
/// コレクションからのみ削除する。プロフィールのメンバーシップは
/// 触らない（二段階の契約）。呼び出し側が
/// `profile_operations::remove_subscription_from_current` を別途呼ばない限り、
/// ぶら下がり参照が残るが、読み取り側の結合で除外されるため許容される。
///
/// # 引数
/// * `store` - アプリケーションストア
/// * `id` - サブスクリプションID
///
/// # 戻り値
/// 成功時はOk(())、見つからない場合はエラー
pub fn delete(store: &mut AppStore, id: &str) -> AppResult<()> {
    store
        .subscriptions
        .remove(id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found(format!("ID {id} のサブスクリプション")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingCycle, CardColor, Category};
    use crate::store::initialize_store;
    use chrono::NaiveDate;

    fn create_dto(name: &str, cost: f64) -> CreateSubscriptionDto {
        CreateSubscriptionDto {
            name: name.to_string(),
            cost,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            category: Category::Other,
            next_bill_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            description: String::new(),
            color: CardColor::White,
        }
    }

    #[test]
    fn test_create_adds_to_store_and_current_profile() {
        // 作成後はコレクションと現在プロフィールの両方から見える
        let mut store = initialize_store();
        let created = create(&mut store, create_dto("Dropbox", 9.99)).unwrap();

        assert!(store.subscriptions().contains(&created.id));
        assert!(store
            .current_profile()
            .unwrap()
            .contains_subscription(&created.id));
    }

    #[test]
    fn test_create_does_not_touch_other_profiles() {
        // 追加されるのは現在プロフィールのメンバーシップのみ
        let mut store = initialize_store();
        let created = create(&mut store, create_dto("Dropbox", 9.99)).unwrap();

        let other = store.profiles().get("2").unwrap();
        assert!(!other.contains_subscription(&created.id));
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        // 空の名前と負の金額は変更境界で拒否される
        let mut store = initialize_store();
        assert!(matches!(
            create(&mut store, create_dto("", 9.99)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            create(&mut store, create_dto("Dropbox", -1.0)),
            Err(AppError::Validation(_))
        ));
        assert_eq!(store.subscriptions().len(), 7);
    }

    #[test]
    fn test_find_by_id_returns_record() {
        let store = initialize_store();
        let found = find_by_id(&store, "2").unwrap();
        assert_eq!(found.name, "Netflix Standard");
    }

    #[test]
    fn test_find_by_id_not_found() {
        // 存在しないIDは明示的なNotFound
        let store = initialize_store();
        assert!(matches!(
            find_by_id(&store, "missing"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_replaces_only_given_fields() {
        // 部分更新では指定フィールド以外が保持される
        let mut store = initialize_store();
        let dto = UpdateSubscriptionDto {
            cost: Some(12.99),
            ..Default::default()
        };
        let updated = update(&mut store, "1", dto).unwrap();

        assert_eq!(updated.cost, 12.99);
        assert_eq!(updated.name, "Spotify Premium");
        assert_eq!(updated.category, Category::Entertainment);
    }

    #[test]
    fn test_update_rejects_negative_cost() {
        // 負の金額での更新は不正レコードとして保存されない
        let mut store = initialize_store();
        let dto = UpdateSubscriptionDto {
            cost: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(
            update(&mut store, "1", dto),
            Err(AppError::Validation(_))
        ));
        assert_eq!(store.subscriptions().get("1").unwrap().cost, 10.99);
    }

    #[test]
    fn test_update_not_found() {
        // 存在しないIDへの更新は明示的なNotFound
        let mut store = initialize_store();
        assert!(matches!(
            update(&mut store, "missing", UpdateSubscriptionDto::default()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_leaves_dangling_profile_reference() {
        // 削除はコレクションのみ。メンバーシップにはIDが残る（許容される挙動）
        let mut store = initialize_store();
        let created = create(&mut store, create_dto("Dropbox", 9.99)).unwrap();
        let members_before = store.subscriptions().len();

        delete(&mut store, &created.id).unwrap();

        assert_eq!(store.subscriptions().len(), members_before - 1);
        assert!(!store.subscriptions().contains(&created.id));
        assert!(store
            .current_profile()
            .unwrap()
            .contains_subscription(&created.id));
    }

    #[test]
    fn test_delete_not_found() {
        let mut store = initialize_store();
        assert!(matches!(
            delete(&mut store, "missing"),
            Err(AppError::NotFound(_))
        ));
    }
}
