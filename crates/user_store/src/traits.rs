//! User store trait definition.

use async_trait::async_trait;
use entities::{User, UserDraft};
use uuid::Uuid;

use crate::StoreResult;

/// Trait for user record storage operations.
///
/// Implementations assign identifiers and timestamps, and enforce the
/// uniqueness of phone numbers and email addresses across all records.
/// Callers are expected to run [`UserDraft::validate`] first; a store only
/// guards the constraints it owns.
///
/// [`UserDraft::validate`]: entities::UserDraft::validate
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a draft as a new record with a fresh identity.
    ///
    /// Fails with [`StoreError::Duplicate`] if the draft's phone number or
    /// email is already held by another record.
    ///
    /// [`StoreError::Duplicate`]: crate::StoreError::Duplicate
    async fn create_user(&self, draft: UserDraft) -> StoreResult<User>;

    /// Gets a user record by ID.
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Lists all user records, ordered by creation time ascending.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Replaces all four business fields of an existing record.
    ///
    /// Re-checks uniqueness (a record may keep its own phone number or
    /// email), preserves identity and creation time, bumps the update
    /// timestamp, and returns the post-update record.
    async fn update_user(&self, id: Uuid, draft: UserDraft) -> StoreResult<User>;

    /// Deletes a user record by ID.
    async fn delete_user(&self, id: Uuid) -> StoreResult<()>;
}
