use crate::Result as DbErrorResult;
use crate::repositories::rows::{USER_COLUMNS, user_from_row};

use pm_core::User;

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// A user together with the stored password hash, for sign-in only.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: Option<String>,
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a user. A duplicate email surfaces as `DbError::UniqueViolation`.
    pub async fn create(&self, user: &User, password_hash: Option<&str>) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, image, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.image)
        .bind(password_hash)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> DbErrorResult<Option<UserCredentials>> {
        let sql = format!(
            "SELECT {}, password_hash FROM users WHERE email = ?",
            USER_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| -> DbErrorResult<UserCredentials> {
            Ok(UserCredentials {
                user: user_from_row(&r)?,
                password_hash: r.try_get("password_hash")?,
            })
        })
        .transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let sql = format!(
            "SELECT {} FROM users ORDER BY name COLLATE NOCASE, email",
            USER_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(user_from_row).collect()
    }
}
