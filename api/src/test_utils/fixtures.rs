//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::app::UserService;
use crate::config::Config;
use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::AppState;

/// Create a test user with default values
pub fn test_user() -> User {
    test_user_named("Jane Doe", "jane@example.com")
}

/// Create a test user with a specific name and email
pub fn test_user_named(name: &str, email: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId(Uuid::new_v4()),
        name: name.to_string(),
        email: email.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Config with rate limiting off, for routers built inside tests
pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/users_test".to_string(),
        port: 0,
        sync_schema: false,
        rate_limit_enabled: false,
        rate_limit_replenish_secs: 2,
        rate_limit_burst: 5,
    }
}

/// App state wired to the given repository
pub fn test_state<UR: UserRepository>(repo: UR) -> AppState<UR> {
    AppState {
        user_service: Arc::new(UserService::new(Arc::new(repo))),
        config: test_config(),
    }
}
