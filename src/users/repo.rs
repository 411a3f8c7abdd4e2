use serde::Serialize;
use sqlx::{FromRow, MySqlPool};
use time::OffsetDateTime;

use crate::error::{ApiError, ApiResult};

use super::dto::UserBody;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(skip_serializing)]
    pub deleted_at: Option<OffsetDateTime>,
}

impl User {
    /// Insert and re-fetch so store-assigned fields (id, timestamps) come back.
    pub async fn insert(db: &MySqlPool, body: &UserBody) -> ApiResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, username, password)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&body.email)
        .bind(&body.username)
        .bind(&body.password)
        .execute(db)
        .await?;

        Self::find_by_id(db, result.last_insert_id()).await
    }

    pub async fn find_all(db: &MySqlPool) -> ApiResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password, created_at, updated_at, deleted_at
            FROM users
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(users)
    }

    pub async fn find_by_id(db: &MySqlPool, id: u64) -> ApiResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password, created_at, updated_at, deleted_at
            FROM users
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Overwrites exactly email, username and password; the store refreshes
    /// `updated_at`. Callers re-fetch to observe it.
    pub async fn update(db: &MySqlPool, id: u64, body: &UserBody) -> ApiResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET email = ?, username = ?, password = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&body.email)
        .bind(&body.username)
        .bind(&body.password)
        .bind(id)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Soft delete: the row stays in storage with `deleted_at` set and drops
    /// out of every other query.
    pub async fn soft_delete(db: &MySqlPool, id: u64) -> ApiResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET deleted_at = CURRENT_TIMESTAMP
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
