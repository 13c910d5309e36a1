//! User service for signup, authentication, and profile management.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserRepository;
use crate::utils::password::{hash_password, verify_password};

/// Business logic around user accounts.
///
/// Hashing happens here so the repository layer only ever sees hashed
/// passwords.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Creates a new UserService with the given repository.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Registers a new user.
    ///
    /// The plaintext password in `new_user` is replaced with an Argon2
    /// hash before the row is inserted. A taken username or email maps
    /// to a `Duplicate` error through the unique constraints.
    pub async fn register(&self, mut new_user: NewUser) -> AppResult<User> {
        new_user.password = hash_password(&new_user.password)?;
        self.repo.create(new_user).await
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// Unknown usernames and wrong passwords produce the same error so
    /// the response does not reveal which part failed.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.repo.find_by_username(username).await?;

        match user {
            Some(user) if verify_password(password, &user.password)? => Ok(user),
            _ => Err(AppError::unauthorized("Invalid username or password")),
        }
    }

    /// Gets a user by username.
    pub async fn get_user(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("user", "username", username))
    }

    /// Applies a partial profile update.
    ///
    /// Only the account owner may edit; a new password is hashed before
    /// it reaches the database.
    pub async fn update_profile(
        &self,
        username: &str,
        mut update_data: UpdateUser,
        acting_user: &str,
    ) -> AppResult<User> {
        if username != acting_user {
            return Err(AppError::forbidden("You may only edit your own profile"));
        }

        // Verify user exists first
        let user = self.get_user(username).await?;

        if update_data.is_empty() {
            return Ok(user);
        }

        if let Some(password) = update_data.password.take() {
            update_data.password = Some(hash_password(&password)?);
        }

        self.repo.update(username, update_data).await
    }

    /// Deletes a user account.
    ///
    /// The schema cascades the user's messages and listings, so the
    /// delete never strands a dangling foreign key.
    pub async fn delete_user(&self, username: &str, acting_user: &str) -> AppResult<()> {
        if username != acting_user {
            return Err(AppError::forbidden("You may only delete your own account"));
        }

        let affected = self.repo.delete(username).await?;
        if affected == 0 {
            return Err(AppError::not_found("user", "username", username));
        }
        Ok(())
    }
}
