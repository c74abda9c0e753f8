//! In-memory user store implementation.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::{User, UserDraft};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{StoreError, StoreResult, UniqueField, UserStore};

/// In-memory user store, the default backend and the test double.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    /// Creates a new in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Finds a record other than `exclude` holding the draft's phone or email.
///
/// Phone is checked across all records before email, so a draft that
/// conflicts on both always reports the phone field; map iteration order
/// must not pick the winner.
fn find_conflict(
    users: &HashMap<Uuid, User>,
    draft: &UserDraft,
    exclude: Option<Uuid>,
) -> Option<UniqueField> {
    let others = || users.values().filter(|u| Some(u.id) != exclude);

    if others().any(|u| u.phone_number == draft.phone_number) {
        return Some(UniqueField::PhoneNumber);
    }
    if others().any(|u| u.email == draft.email) {
        return Some(UniqueField::Email);
    }
    None
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, draft: UserDraft) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if let Some(field) = find_conflict(&users, &draft, None) {
            return Err(StoreError::duplicate(field));
        }
        let user = User::from_draft(draft);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(result)
    }

    async fn update_user(&self, id: Uuid, draft: UserDraft) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&id) {
            return Err(StoreError::not_found(id));
        }
        if let Some(field) = find_conflict(&users, &draft, Some(id)) {
            return Err(StoreError::duplicate(field));
        }
        let user = users.get_mut(&id).ok_or_else(|| StoreError::not_found(id))?;
        user.apply_draft(draft);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        let mut users = self.users.write().await;
        if users.remove(&id).is_none() {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(phone: &str, email: &str) -> UserDraft {
        UserDraft::new("Ada Lovelace", phone, email, "mathematics")
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let store = MemoryUserStore::new();
        let created = store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();

        let fetched = store.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_duplicate_phone_rejected_first_record_kept() {
        let store = MemoryUserStore::new();
        let first = store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();

        let err = store
            .create_user(draft("123-456-7890", "grace@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Duplicate {
                field: UniqueField::PhoneNumber
            }
        ));

        let all = store.list_users().await.unwrap();
        assert_eq!(all, vec![first]);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryUserStore::new();
        store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();

        let err = store
            .create_user(draft("123-456-7891", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Duplicate {
                field: UniqueField::Email
            }
        ));
    }

    #[tokio::test]
    async fn test_conflict_on_both_fields_always_names_phone() {
        let store = MemoryUserStore::new();
        store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();
        store
            .create_user(draft("222-222-2222", "grace@example.com"))
            .await
            .unwrap();

        // Phone clashes with the first record, email with the second; the
        // reported field must not depend on which record is seen first.
        let err = store
            .create_user(draft("123-456-7890", "grace@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Duplicate {
                field: UniqueField::PhoneNumber
            }
        ));
    }

    #[tokio::test]
    async fn test_list_orders_by_creation_time() {
        let store = MemoryUserStore::new();
        let a = store
            .create_user(draft("111-111-1111", "a@example.com"))
            .await
            .unwrap();
        let b = store
            .create_user(draft("222-222-2222", "b@example.com"))
            .await
            .unwrap();
        let c = store
            .create_user(draft("333-333-3333", "c@example.com"))
            .await
            .unwrap();

        let ids: Vec<Uuid> = store
            .list_users()
            .await
            .unwrap()
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_identity() {
        let store = MemoryUserStore::new();
        let created = store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();

        let updated = store
            .update_user(
                created.id,
                UserDraft::new("Ada King", "123-456-7890", "ada@example.com", "chess, reading"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.hobbies, "chess, reading");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_may_keep_own_phone_and_email() {
        let store = MemoryUserStore::new();
        let created = store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();

        // Same phone and email resubmitted for the same record is not a conflict.
        let result = store
            .update_user(created.id, draft("123-456-7890", "ada@example.com"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_conflicting_with_other_record_rejected() {
        let store = MemoryUserStore::new();
        store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();
        let other = store
            .create_user(draft("222-222-2222", "grace@example.com"))
            .await
            .unwrap();

        let err = store
            .update_user(other.id, draft("123-456-7890", "grace@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Duplicate {
                field: UniqueField::PhoneNumber
            }
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_id_leaves_store_unchanged() {
        let store = MemoryUserStore::new();
        let created = store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();

        let err = store
            .update_user(Uuid::new_v4(), draft("999-999-9999", "x@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        assert_eq!(store.list_users().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete_then_get_yields_nothing() {
        let store = MemoryUserStore::new();
        let created = store
            .create_user(draft("123-456-7890", "ada@example.com"))
            .await
            .unwrap();

        store.delete_user(created.id).await.unwrap();
        assert!(store.get_user(created.id).await.unwrap().is_none());

        let err = store.delete_user(created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
