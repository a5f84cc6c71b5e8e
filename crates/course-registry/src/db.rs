//! SQLite backend (embedded, no external dependencies)

use crate::course::{Course, CourseUpdate, NewCourse};
use crate::error::{RegistryError, Result};
use crate::registry::{validate_title, CourseRegistry};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Course registry backed by an embedded SQLite database. Relies on the
/// database for statement-level isolation; no locking of its own.
pub struct SqliteRegistry {
    pool: SqlitePool,
}

impl SqliteRegistry {
    /// Open (or create) the database file at `database_path` and run
    /// migrations.
    pub async fn new(database_path: &str) -> anyhow::Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");
        Ok(Self { pool })
    }

    /// Private in-memory database, used by tests. A single connection
    /// keeps every query on the same transient database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS courses (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn fetch(&self, id: &str) -> Result<Option<Course>> {
        let row: Option<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, created_at
            FROM courses WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }
}

#[async_trait]
impl CourseRegistry for SqliteRegistry {
    async fn list(&self) -> Result<Vec<Course>> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, created_at
            FROM courses
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get(&self, id: &str) -> Result<Course> {
        self.fetch(id)
            .await?
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    async fn create(&self, new: NewCourse) -> Result<Course> {
        validate_title(&new.title)?;

        let id = uuid::Uuid::new_v4().to_string();
        let course = Course::new(id, new.title, new.description);

        sqlx::query(
            r#"
            INSERT INTO courses (id, title, description, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&course.id)
        .bind(&course.title)
        .bind(&course.description)
        .bind(course.created_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Created course {} in sqlite", course.id);
        Ok(course)
    }

    async fn update(&self, id: &str, update: CourseUpdate) -> Result<Course> {
        // Read first so omitted fields keep their stored values
        let mut course = self
            .fetch(id)
            .await?
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        update.apply(&mut course);

        sqlx::query(
            r#"
            UPDATE courses SET title = ?1, description = ?2 WHERE id = ?3
            "#,
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(course)
    }

    async fn delete(&self, id: &str) -> Result<Option<Course>> {
        let course = self.fetch(id).await?;

        if course.is_some() {
            sqlx::query(
                r#"
                DELETE FROM courses WHERE id = ?1
                "#,
            )
            .bind(id)
            .execute(&self.pool)
            .await?;
        }

        Ok(course)
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct CourseRow {
    id: String,
    title: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course {
            id: r.id,
            title: r.title,
            description: r.description,
            created_at: r.created_at,
        }
    }
}
