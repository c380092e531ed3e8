//! `users` table definition and idempotent bootstrap.
//!
//! # Invariants
//! - Bootstrap never drops, alters or re-stamps an existing store.

use crate::db::DbResult;
use rusqlite::Connection;

const USERS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL
);";

/// Ensures the `users` table exists.
///
/// Safe to call any number of times: an existing table is kept as-is, and
/// nothing else in the store (including `PRAGMA user_version`) is touched.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(USERS_TABLE_SQL)?;
    Ok(())
}
