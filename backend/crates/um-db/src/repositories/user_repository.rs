//! User repository: every read and write of the `users` table.
//!
//! Email comparisons are case-insensitive on the SQL side
//! (`lower(..) = lower(?)`), so rows written by other tools still match even
//! if they were not stored in canonical form. SQLite's `lower()` folds ASCII
//! only, so first names are compared in Rust.

use crate::{DbError, Result as DbErrorResult};

use um_core::{User, UserFields};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow {
            id,
            first_name,
            last_name,
            email,
        } = row;

        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn exists_by_email(&self, email: &str) -> DbErrorResult<bool> {
        let found: i64 = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM users WHERE lower(email) = lower(?)
                )
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(found != 0)
    }

    /// Same as [`Self::exists_by_email`] but ignores the row with `id`, so a
    /// user keeping their own email is not reported as a collision.
    pub async fn exists_by_email_excluding_id(&self, email: &str, id: i64) -> DbErrorResult<bool> {
        let found: i64 = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM users WHERE lower(email) = lower(?) AND id <> ?
                )
            "#,
        )
        .bind(email)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(found != 0)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, first_name, last_name, email
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT id, first_name, last_name, email
                FROM users
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Both fields are compared case-insensitively, the first name with
    /// Unicode case folding. Email is unique, so at most one row can match.
    pub async fn find_by_first_name_and_email(
        &self,
        first_name: &str,
        email: &str,
    ) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, first_name, last_name, email
                FROM users
                WHERE lower(email) = lower(?)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let wanted = first_name.to_lowercase();

        Ok(row
            .filter(|row| row.first_name.to_lowercase() == wanted)
            .map(User::from))
    }

    /// Insert a new row; the store assigns the id.
    ///
    /// Fails with [`DbError::UniqueViolation`] if the email is already taken.
    pub async fn insert(&self, fields: &UserFields) -> DbErrorResult<User> {
        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (first_name, last_name, email)
                VALUES (?, ?, ?)
                RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Overwrite the mutable fields of an existing row.
    ///
    /// Fails with [`DbError::NotFound`] if no row has `user.id`, and with
    /// [`DbError::UniqueViolation`] if the new email belongs to another row.
    pub async fn update(&self, user: &User) -> DbErrorResult<User> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, email = ?
                WHERE id = ?
                RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::from).ok_or_else(|| DbError::NotFound {
            id: user.id,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Cheap round trip used by the health probe.
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
