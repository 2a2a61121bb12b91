//! User service
//!
//! Business layer between the HTTP handlers and the user repository.
//! Both operations forward to the repository and return its result unchanged.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::AppError;

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Create a user with the given name and email
    pub async fn create(&self, name: &str, email: &str) -> Result<User, AppError> {
        let user = self.users.create(&NewUser::new(name, email)).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Find a user by ID
    pub async fn get_user(&self, id: &UserId) -> Result<Option<User>, AppError> {
        let user = self.users.find_by_id(id).await?;
        tracing::debug!(user_id = %id, found = user.is_some(), "User lookup");
        Ok(user)
    }
}
