//! End-to-end seed-and-report sequence.
//!
//! # Responsibility
//! - Open the store, ensure the schema, insert the seed user and commit.
//! - Read every row back and render the report.
//! - Release the connection on every exit path.
//!
//! # Invariants
//! - The insert is committed before the read that follows it.
//! - A failed insert rolls back; the store keeps its previous rows.
//! - Errors are never swallowed: the first failure ends the run.

use crate::config::AppConfig;
use crate::db::{close_db, open_db, DbError};
use crate::model::user::User;
use crate::repo::user_repo::{RepoError, SqliteUserRepository};
use crate::report::render_report;
use crate::service::user_service::UserService;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::time::Instant;

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a seed-and-report run.
#[derive(Debug)]
pub enum AppError {
    Db(DbError),
    Repo(RepoError),
    Io(io::Error),
}

impl AppError {
    /// True when the store rejected the seed user (e.g. duplicate email).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Repo(err) if err.is_constraint_violation())
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "db_failed",
            Self::Repo(RepoError::ConstraintViolation { .. }) => "constraint_violation",
            Self::Repo(_) => "repo_failed",
            Self::Io(_) => "output_failed",
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to write report: {err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<io::Error> for AppError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Runs the full sequence against `config.db_path`, writing the report to
/// `out`, and returns the rows that were rendered.
///
/// The connection is owned here: early returns drop (and close) it, the
/// success path closes it explicitly.
pub fn seed_and_report<W: Write + ?Sized>(
    config: &AppConfig,
    out: &mut W,
) -> AppResult<Vec<User>> {
    let started_at = Instant::now();
    info!("event=seed_and_report module=seed status=start");

    match run(config, out) {
        Ok(users) => {
            info!(
                "event=seed_and_report module=seed status=ok rows={} duration_ms={}",
                users.len(),
                started_at.elapsed().as_millis()
            );
            Ok(users)
        }
        Err(err) => {
            error!(
                "event=seed_and_report module=seed status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

fn run<W: Write + ?Sized>(config: &AppConfig, out: &mut W) -> AppResult<Vec<User>> {
    let mut conn = open_db(&config.db_path)?;

    let tx = conn.transaction()?;
    let seeded =
        UserService::new(SqliteUserRepository::new(&tx)).register_user(&config.seed_user)?;
    tx.commit()?;
    info!(
        "event=seed_user module=seed status=ok user_id={}",
        seeded.id
    );

    let users = UserService::new(SqliteUserRepository::new(&conn)).list_users()?;
    render_report(&users, out)?;

    close_db(conn)?;
    Ok(users)
}
