//! SQLite-backed user store.

use crate::core::config::StorageConfig;
use crate::core::error::StoreError;
use crate::models::user::{seed_users, NewUser, User, UserPatch};
use crate::stores::UserStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id     INTEGER PRIMARY KEY,
        first  TEXT    NOT NULL,
        last   TEXT    NOT NULL,
        email  TEXT    NOT NULL,
        role   TEXT,
        active BOOLEAN NOT NULL DEFAULT 1
    )
"#;

/// User store persisted in a single `users` table
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect using the storage config, create the table and seed it if empty.
    pub async fn connect(config: &StorageConfig) -> Result<Self, StoreError> {
        info!(database_url = %config.database_url, "Connecting to SQLite database");

        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        // Each connection to :memory: opens a private database, so the pool
        // must hold exactly one connection for the life of the process.
        let pool = if is_memory_url(&config.database_url) {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?
        };

        let store = Self::with_pool(pool);
        store.init_schema().await?;

        Ok(store)
    }

    /// Wrap an existing pool without touching the schema
    pub fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the users table and insert the seed users when it is empty
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        if count == 0 {
            for user in seed_users() {
                sqlx::query(
                    "INSERT INTO users (id, first, last, email, role, active) VALUES (?, ?, ?, ?, ?, ?)",
                )
                .bind(user.id)
                .bind(&user.first)
                .bind(&user.last)
                .bind(&user.email)
                .bind(&user.role)
                .bind(user.active)
                .execute(&mut *tx)
                .await?;
            }
            info!(users = seed_users().len(), "Seeded users table");
        } else {
            info!(users = count, "Using existing users table");
        }

        tx.commit().await?;
        Ok(())
    }

    /// Close the connection pool
    pub async fn close(&self) {
        info!("Closing SQLite connection pool");
        self.pool.close().await;
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, first, last, email, role, active FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        debug!(user_id = id, "Finding user by id");

        sqlx::query_as::<_, User>(
            "SELECT id, first, last, email, role, active FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        // Next id is computed inside the insert so the statement is atomic
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, first, last, email, role, active)
            SELECT COALESCE(MAX(id) + 1, 0), ?, ?, ?, ?, 1 FROM users
            RETURNING id, first, last, email, role, active
            "#,
        )
        .bind(&new_user.first)
        .bind(&new_user.last)
        .bind(&new_user.email)
        .bind(&new_user.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first = COALESCE(?, first),
                last  = COALESCE(?, last),
                email = COALESCE(?, email),
                role  = COALESCE(?, role)
            WHERE id = ?
            RETURNING id, first, last, email, role, active
            "#,
        )
        .bind(&patch.first)
        .bind(&patch.last)
        .bind(&patch.email)
        .bind(&patch.role)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn deactivate(&self, id: i64) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET active = 0
            WHERE id = ?
            RETURNING id, first, last, email, role, active
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
