//! Core of the `air_bnb` user store: open the SQLite store, make sure the
//! `users` table exists, seed one user and report every row.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod seed;
pub mod service;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::user::{NewUser, User, UserId, UserValidationError};
pub use repo::user_repo::{
    ConstraintKind, RepoError, RepoResult, SqliteUserRepository, UserRepository,
};
pub use report::{render_report, REPORT_HEADER};
pub use seed::{seed_and_report, AppError, AppResult};
pub use service::user_service::UserService;
