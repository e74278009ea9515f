use crate::core::error::StoreError;
use crate::models::user::{seed_users, NewUser, User, UserPatch};
use crate::stores::UserStore;
use async_trait::async_trait;
use parking_lot::RwLock;

/// In-process user list
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Create a store holding the seed users
    pub fn seeded() -> Self {
        Self {
            users: RwLock::new(seed_users()),
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    fn with_user<F>(&self, id: i64, f: F) -> Result<User, StoreError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write();
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(StoreError::NotFound(id))?;

        f(user);
        Ok(user.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().clone())
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        self.users
            .read()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        // Id assignment and append happen under one write lock
        let mut users = self.users.write();
        let id = users.iter().map(|user| user.id).max().map_or(0, |max| max + 1);

        let user = User::new(id, new_user);
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError> {
        self.with_user(id, |user| patch.apply(user))
    }

    async fn deactivate(&self, id: i64) -> Result<User, StoreError> {
        self.with_user(id, |user| user.active = false)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
