pub mod memory;
pub mod sqlite;

use crate::core::error::StoreError;
use crate::models::user::{NewUser, User, UserPatch};
use async_trait::async_trait;

/// Storage for directory entries.
///
/// Implementations own the id sequence: a new user gets one more than the
/// highest id currently stored, or 0 when the store is empty.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    async fn get(&self, id: i64) -> Result<User, StoreError>;

    /// Appends a new active user and returns it.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Applies the supplied fields and returns the updated record.
    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError>;

    /// Marks the user inactive. Deactivating an inactive user is a no-op.
    async fn deactivate(&self, id: i64) -> Result<User, StoreError>;

    /// Short name of the backend for logs and health output.
    fn backend(&self) -> &'static str;
}
