//! Repository layer for the user store.
//!
//! # Responsibility
//! - Define the data access contract used by services.
//! - Keep SQL and SQLite error codes out of service code.
//!
//! # Invariants
//! - Writes call `NewUser::validate()` before touching SQL.
//! - Constraint failures surface as `RepoError::ConstraintViolation`, not as
//!   opaque transport errors.

pub mod user_repo;
