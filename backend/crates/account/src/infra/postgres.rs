//! PostgreSQL Store Implementation
//!
//! One row per user; the favourites and history lists are `TEXT[]`
//! columns mutated with guarded `array_append` / `array_remove` so the
//! set semantics hold inside a single statement.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::{
    list_kind::ListKind, user_id::UserId, user_password::UserPassword,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserStore for PgUserStore {
    async fn insert(&self, user: &User) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                user_name,
                password_hash,
                favourites,
                history,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.user_name)
        .bind(user.password_hash.as_phc_string())
        .bind(&user.favourites)
        .bind(&user.history)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                password_hash,
                favourites,
                history,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_user_name(&self, user_name: &str) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                password_hash,
                favourites,
                history,
                created_at,
                updated_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn push_unique(
        &self,
        user_id: &UserId,
        kind: ListKind,
        item_id: &str,
    ) -> AccountResult<Option<Vec<String>>> {
        // The column name comes from the ListKind enum, never from input
        let sql = format!(
            r#"
            UPDATE users SET
                {col} = CASE
                    WHEN $2 = ANY({col}) THEN {col}
                    ELSE array_append({col}, $2)
                END,
                updated_at = $3
            WHERE user_id = $1
            RETURNING {col}
            "#,
            col = kind.column()
        );

        let list = sqlx::query_scalar::<_, Vec<String>>(&sql)
            .bind(user_id.as_uuid())
            .bind(item_id)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(list)
    }

    async fn pull(
        &self,
        user_id: &UserId,
        kind: ListKind,
        item_id: &str,
    ) -> AccountResult<Option<Vec<String>>> {
        let sql = format!(
            r#"
            UPDATE users SET
                {col} = array_remove({col}, $2),
                updated_at = $3
            WHERE user_id = $1
            RETURNING {col}
            "#,
            col = kind.column()
        );

        let list = sqlx::query_scalar::<_, Vec<String>>(&sql)
            .bind(user_id.as_uuid())
            .bind(item_id)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(list)
    }

    async fn ping(&self) -> AccountResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}

/// Map insert failures; 23505 is the unique_violation class covering the
/// user_name index
fn map_insert_error(err: sqlx::Error) -> AccountError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AccountError::UserNameTaken;
        }
    }
    AccountError::CreateFailed(err)
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_name: String,
    password_hash: String,
    favourites: Vec<String>,
    history: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountResult<User> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            user_name: self.user_name,
            password_hash,
            favourites: self.favourites,
            history: self.history,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
