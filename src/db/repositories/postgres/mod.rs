//! Postgres repository implementation using Diesel.
//!
//! This module implements the repository trait against a Postgres database
//! holding a single `students` table with a unique roll number column.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Lazy connection establishment so an unreachable database never halts
//!   process startup; each request fails individually instead
//! - Best-effort migration execution during the startup probe
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{error, info, warn};
use std::time::Duration;
use tokio::task;

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, StudentRepository};
use crate::models::{NewStudent, Student, StudentId};

mod models;
mod schema;

use models::{NewStudentRow, StudentRow};
use schema::students;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
    /// - `PG_POOL_MAX`: Maximum pool size (default: 10)
    /// - `PG_POOL_MIN`: Minimum pool size (default: 1)
    /// - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
    /// - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("PG_DATABASE_URL"))
            .map_err(|_| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let min_pool_size = std::env::var("PG_POOL_MIN")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_sec = std::env::var("PG_IDLE_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        Ok(Self {
            database_url,
            max_pool_size,
            min_pool_size,
            connection_timeout_sec,
            idle_timeout_sec,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed repository for Postgres.
///
/// The pool is built without establishing any connection, so construction
/// succeeds even when the database is unreachable. A detached probe reports
/// the initial connection outcome to the log and runs pending migrations
/// when it gets through.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository and start the connection probe.
    ///
    /// # Arguments
    /// * `config` - Database configuration
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true) // Validate connections before use
            .build_unchecked(manager);

        let repo = Self { pool };
        repo.spawn_connection_probe();

        Ok(repo)
    }

    /// Probe the database once in the background.
    ///
    /// Logs the outcome without ever failing startup. Requests made while
    /// the database is down fail individually at connection checkout.
    fn spawn_connection_probe(&self) {
        let pool = self.pool.clone();

        std::thread::spawn(move || match pool.get() {
            Ok(mut conn) => {
                if let Err(e) = Self::run_migrations(&mut conn) {
                    warn!("Database migrations failed: {}", e);
                } else {
                    info!("Database connected");
                }
            }
            Err(e) => {
                error!("Database connection failed: {}", e);
            }
        });
    }

    /// Run pending database migrations.
    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Migration failed: {}", e),
                ErrorContext::new("run_migrations"),
            )
        })?;

        Ok(())
    }

    /// Run a closure against a pooled connection on the blocking thread pool.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection_with_context(
                    e.to_string(),
                    ErrorContext::new("get_connection"),
                )
            })?;

            f(&mut conn)
        })
        .await
        .map_err(|e| {
            RepositoryError::internal_with_context(
                format!("Task join error: {}", e),
                ErrorContext::new("spawn_blocking"),
            )
        })?
    }
}

fn map_diesel_error(err: diesel::result::Error) -> RepositoryError {
    RepositoryError::from(err)
}

fn row_to_student(row: StudentRow) -> Student {
    Student {
        id: StudentId(row.id),
        first_name: row.first_name,
        last_name: row.last_name,
        roll_no: row.roll_no,
        password: row.password,
        contact_number: row.contact_number,
    }
}

fn new_student_row(student: &NewStudent) -> NewStudentRow {
    NewStudentRow {
        first_name: student.first_name.clone(),
        last_name: student.last_name.clone(),
        roll_no: student.roll_no.clone(),
        password: student.password.clone(),
        contact_number: student.contact_number.clone(),
    }
}

#[async_trait]
impl StudentRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(map_diesel_error)
        })
        .await
    }

    async fn insert_student(&self, student: &NewStudent) -> RepositoryResult<Student> {
        let new_row = new_student_row(student);

        self.with_conn(move |conn| {
            let inserted: StudentRow = diesel::insert_into(students::table)
                .values(&new_row)
                .returning(StudentRow::as_returning())
                .get_result(conn)
                .map_err(|e| map_diesel_error(e).with_operation("insert_student"))?;

            Ok(row_to_student(inserted))
        })
        .await
    }

    async fn list_students(&self) -> RepositoryResult<Vec<Student>> {
        self.with_conn(|conn| {
            let rows = students::table
                .select(StudentRow::as_select())
                .load::<StudentRow>(conn)
                .map_err(map_diesel_error)?;

            Ok(rows.into_iter().map(row_to_student).collect())
        })
        .await
    }

    async fn update_contact_number(
        &self,
        roll_no: &str,
        contact_number: &str,
    ) -> RepositoryResult<Student> {
        let roll_no = roll_no.to_string();
        let contact_number = contact_number.to_string();

        self.with_conn(move |conn| {
            let updated: StudentRow =
                diesel::update(students::table.filter(students::roll_no.eq(&roll_no)))
                    .set(students::contact_number.eq(&contact_number))
                    .returning(StudentRow::as_returning())
                    .get_result(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::NotFound => RepositoryError::not_found(format!(
                            "Student with roll number '{}' not found",
                            roll_no
                        )),
                        other => map_diesel_error(other),
                    })?;

            Ok(row_to_student(updated))
        })
        .await
    }

    async fn delete_student(&self, roll_no: &str) -> RepositoryResult<Student> {
        let roll_no = roll_no.to_string();

        self.with_conn(move |conn| {
            let removed: StudentRow =
                diesel::delete(students::table.filter(students::roll_no.eq(&roll_no)))
                    .returning(StudentRow::as_returning())
                    .get_result(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::NotFound => RepositoryError::not_found(format!(
                            "Student with roll number '{}' not found",
                            roll_no
                        )),
                        other => map_diesel_error(other),
                    })?;

            Ok(row_to_student(removed))
        })
        .await
    }
}
