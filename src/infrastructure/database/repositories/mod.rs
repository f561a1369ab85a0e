//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod address_repository;
pub mod customer_repository;
pub mod repository_provider;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}
