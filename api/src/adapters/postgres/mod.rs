//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod user_repo;


use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::users;
use crate::error::DomainError;

pub use user_repo::PostgresUserRepository;

/// Create the tables backing the repositories if they are missing
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut users_table = schema.create_table_from_entity(users::Entity);
    users_table.if_not_exists();

    db.execute(backend.build(&users_table))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!("Schema ready");
    Ok(())
}
