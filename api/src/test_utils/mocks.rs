//! In-memory implementations of port traits
//!
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    create_calls: Arc<RwLock<Vec<NewUser>>>,
    failing: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    /// Arguments of every `create` call, in order
    pub fn create_calls(&self) -> Vec<NewUser> {
        self.create_calls.read().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(DomainError::Database("database unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        self.create_calls.write().unwrap().push(new_user.clone());
        self.check_available()?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            created_at: now,
            updated_at: now,
        };

        self.users.write().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        Ok(self.users.read().unwrap().get(id).cloned())
    }
}
