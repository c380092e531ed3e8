//! Typed records for the user store.
//!
//! # Invariants
//! - Rows are read into named-field structs, never positional tuples.

pub mod user;
