use crate::db::models::{DbPalmTemplate, DbUser};
use crate::db::schema::SQLITE_INIT;
use crate::error::PalmgateError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct IdentityStorage {
    pool: SqlitePool,
}

impl IdentityStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PalmgateError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new account row. Email uniqueness is enforced by the schema.
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<DbUser, PalmgateError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();
        sqlx::query(
            "INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(email)
        .bind(password_hash)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(DbUser {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        })
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<DbUser>, PalmgateError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_user).transpose()
    }

    /// Upsert by unique user_id. A second registration overwrites the stored
    /// landmarks and bumps `updated_at`; `created_at` keeps its original value.
    /// Uses SQLite `INSERT ... ON CONFLICT(user_id) DO UPDATE`.
    pub async fn upsert_palm_template(
        &self,
        user_id: &str,
        landmarks_json: &str,
    ) -> Result<(), PalmgateError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r#"
            INSERT INTO palm_data (id, user_id, landmarks_json, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                landmarks_json=excluded.landmarks_json,
                updated_at=excluded.updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id)
        .bind(landmarks_json)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_palm_template(
        &self,
        user_id: &str,
    ) -> Result<Option<DbPalmTemplate>, PalmgateError> {
        let row = sqlx::query(
            r#"SELECT id, user_id, landmarks_json, created_at, updated_at
               FROM palm_data WHERE user_id = ?"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_template).transpose()
    }

    pub async fn has_palm_template(&self, user_id: &str) -> Result<bool, PalmgateError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM palm_data WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    fn row_to_user(row: SqliteRow) -> Result<DbUser, PalmgateError> {
        Ok(DbUser {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            created_at: Self::parse_timestamp(row.try_get("created_at")?)?,
        })
    }

    fn row_to_template(row: SqliteRow) -> Result<DbPalmTemplate, PalmgateError> {
        Ok(DbPalmTemplate {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            landmarks_json: row.try_get("landmarks_json")?,
            created_at: Self::parse_timestamp(row.try_get("created_at")?)?,
            updated_at: Self::parse_timestamp(row.try_get("updated_at")?)?,
        })
    }

    fn parse_timestamp(raw: String) -> Result<DateTime<Utc>, PalmgateError> {
        Ok(DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc))
    }
}
