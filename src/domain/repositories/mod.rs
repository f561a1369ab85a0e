//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use async_trait::async_trait;

use super::address::AddressRepository;
use super::customer::CustomerRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let address = repos.addresses().find_by_id(1).await?;
///     let customer = repos.customers().find_by_tax_id("12345678900").await?;
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn addresses(&self) -> &dyn AddressRepository;
    fn customers(&self) -> &dyn CustomerRepository;

    /// Cheap round-trip to the backing store, used by the health check.
    async fn ping(&self) -> DomainResult<()>;
}
