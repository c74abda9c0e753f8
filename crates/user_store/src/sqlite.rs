//! SQLite-backed user store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::{User, UserDraft};
use sqlx::{sqlite::SqlitePoolOptions, FromRow, Pool, Sqlite};
use uuid::Uuid;

use crate::{StoreError, StoreResult, UniqueField, UserStore};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    phone_number TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    hobbies TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// Database row for a user record.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    name: String,
    phone_number: String,
    email: String,
    hobbies: String,
    created_at: String,
    updated_at: String,
}

fn parse_timestamp(raw: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StoreError::Other(format!("corrupt timestamp in users row: {raw}")))
}

/// A row that does not parse back into a record is corruption, surfaced
/// as an error rather than patched over with substitute values.
impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> StoreResult<Self> {
        let id: Uuid = row
            .id
            .parse()
            .map_err(|_| StoreError::Other(format!("corrupt id in users row: {}", row.id)))?;
        let created_at = parse_timestamp(&row.created_at)?;
        let updated_at = parse_timestamp(&row.updated_at)?;

        Ok(User {
            id,
            name: row.name,
            phone_number: row.phone_number,
            email: row.email,
            hobbies: row.hobbies,
            created_at,
            updated_at,
        })
    }
}

/// Maps a SQLite unique-constraint violation to the offending field.
fn map_write_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            let message = db.message();
            if message.contains("users.phone_number") {
                return StoreError::duplicate(UniqueField::PhoneNumber);
            }
            if message.contains("users.email") {
                return StoreError::duplicate(UniqueField::Email);
            }
        }
    }
    StoreError::Database(e)
}

/// SQLite-backed user store.
///
/// Phone number and email uniqueness is enforced by UNIQUE columns, so a
/// racing create or update loses at the database rather than in this code.
pub struct SqliteUserStore {
    pool: Pool<Sqlite>,
}

impl SqliteUserStore {
    /// Connects to the database at `database_url` and runs migrations.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;

        tracing::debug!(database_url, "Connected to SQLite user store");
        Ok(store)
    }

    async fn run_migrations(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create_user(&self, draft: UserDraft) -> StoreResult<User> {
        let user = User::from_draft(draft);

        sqlx::query(
            "INSERT INTO users (id, name, phone_number, email, hobbies, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.phone_number)
        .bind(&user.email)
        .bind(&user.hobbies)
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, phone_number, email, hobbies, created_at, updated_at
             FROM users
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, name, phone_number, email, hobbies, created_at, updated_at
             FROM users
             ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update_user(&self, id: Uuid, draft: UserDraft) -> StoreResult<User> {
        let result = sqlx::query(
            "UPDATE users
             SET name = ?, phone_number = ?, email = ?, hobbies = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&draft.name)
        .bind(&draft.phone_number)
        .bind(&draft.email)
        .bind(&draft.hobbies)
        .bind(Utc::now().to_rfc3339())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }

        self.get_user(id).await?.ok_or_else(|| StoreError::not_found(id))
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}
