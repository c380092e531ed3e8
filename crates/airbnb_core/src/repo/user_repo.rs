//! User repository contract and SQLite implementation.

use crate::db::DbError;
use crate::model::user::{NewUser, User, UserId, UserValidationError};
use log::{debug, warn};
use rusqlite::{ffi, params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT id, name, email FROM users;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Which schema constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    NotNull,
    PrimaryKey,
    Other,
}

impl ConstraintKind {
    fn from_extended_code(code: i32) -> Self {
        match code {
            ffi::SQLITE_CONSTRAINT_UNIQUE => Self::Unique,
            ffi::SQLITE_CONSTRAINT_NOTNULL => Self::NotNull,
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Self::PrimaryKey,
            _ => Self::Other,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::NotNull => "not_null",
            Self::PrimaryKey => "primary_key",
            Self::Other => "other",
        }
    }
}

/// Error returned by user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(UserValidationError),
    ConstraintViolation {
        kind: ConstraintKind,
        message: String,
    },
    Db(DbError),
    InvalidData(String),
}

impl RepoError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ConstraintViolation { message, .. } => {
                write!(f, "constraint violation: {message}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::ConstraintViolation { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<UserValidationError> for RepoError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        let DbError::Sqlite(err) = value;
        Self::from(err)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation {
                    kind: ConstraintKind::from_extended_code(failure.extended_code),
                    message: message.unwrap_or_else(|| failure.to_string()),
                }
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Data access contract for `users`.
pub trait UserRepository {
    fn insert_user(&self, user: &NewUser) -> RepoResult<UserId>;
    fn list_users(&self) -> RepoResult<Vec<User>>;
}

/// SQLite-backed user repository over a borrowed connection.
///
/// Accepts a `Transaction` as well through `Deref<Target = Connection>`.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, user: &NewUser) -> RepoResult<UserId> {
        user.validate()?;

        let result = self.conn.execute(
            "INSERT INTO users (name, email) VALUES (?1, ?2);",
            params![user.name.as_str(), user.email.as_str()],
        );

        match result {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                debug!("event=user_insert module=repo status=ok user_id={id}");
                Ok(id)
            }
            Err(err) => {
                let err = RepoError::from(err);
                if let RepoError::ConstraintViolation { kind, .. } = &err {
                    warn!(
                        "event=user_insert module=repo status=error error_code=constraint_violation constraint={}",
                        kind.as_str()
                    );
                }
                Err(err)
            }
        }
    }

    /// Returns every row in the store's natural scan order.
    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(USER_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        debug!(
            "event=user_list module=repo status=ok count={}",
            users.len()
        );
        Ok(users)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let id: UserId = row.get("id")?;
    let name: Option<String> = row.get("name")?;
    let email: Option<String> = row.get("email")?;

    let name = name.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL users.name for user_id={id}"))
    })?;
    let email = email.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL users.email for user_id={id}"))
    })?;

    Ok(User { id, name, email })
}
