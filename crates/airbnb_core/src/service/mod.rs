//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Expose user-level operations to the seed sequence and the CLI.
//! - Stay storage-agnostic: transactions belong to the caller.

pub mod user_service;
