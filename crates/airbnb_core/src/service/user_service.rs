//! User use-case service.

use crate::model::user::{NewUser, User};
use crate::repo::user_repo::{RepoResult, UserRepository};

/// Use-case wrapper around a `UserRepository`.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts `user` and returns the stored record with its assigned id.
    ///
    /// # Errors
    /// - `RepoError::Validation` for blank name or email.
    /// - `RepoError::ConstraintViolation` when the email is already taken.
    pub fn register_user(&self, user: &NewUser) -> RepoResult<User> {
        let id = self.repo.insert_user(user)?;
        Ok(user.clone().into_user(id))
    }

    /// Lists all users in store order.
    pub fn list_users(&self) -> RepoResult<Vec<User>> {
        self.repo.list_users()
    }
}
