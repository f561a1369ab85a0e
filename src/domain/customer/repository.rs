//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Customer>>;
    async fn find_all(&self) -> DomainResult<Vec<Customer>>;
    /// Inserts a new customer. A CPF that is already stored must be rejected
    /// with `DomainError::Conflict`, whatever checks the caller ran before.
    async fn save(&self, customer: Customer) -> DomainResult<Customer>;
    /// Replaces an existing customer. NotFound if the CPF is unknown.
    async fn update(&self, customer: Customer) -> DomainResult<Customer>;
    async fn delete(&self, tax_id: &str) -> DomainResult<()>;
}
