//! Customer service: application-layer orchestration
//!
//! Validation order on `save` is observable through the error returned:
//! a duplicate CPF wins over an unknown address.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::addresses::AddressService;
use crate::domain::{Customer, CustomerChanges, DomainError, DomainResult, RepositoryProvider};

pub struct CustomerService {
    repos: Arc<dyn RepositoryProvider>,
    addresses: Arc<AddressService>,
}

impl CustomerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, addresses: Arc<AddressService>) -> Self {
        Self { repos, addresses }
    }

    /// Get a customer by CPF, or `NotFound` naming the CPF.
    pub async fn get(&self, tax_id: &str) -> DomainResult<Customer> {
        self.repos
            .customers()
            .find_by_tax_id(tax_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer", "cpf", tax_id))
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Customer>> {
        self.repos.customers().find_all().await
    }

    /// Register a new customer.
    ///
    /// Fails with `Conflict` if the CPF is taken, then with the address
    /// service's `NotFound` if the address does not exist. The repository
    /// rejects a duplicate CPF on insert as well, which covers two
    /// registrations racing past the first check.
    pub async fn save(&self, customer: Customer) -> DomainResult<Customer> {
        if self
            .repos
            .customers()
            .find_by_tax_id(&customer.tax_id)
            .await?
            .is_some()
        {
            warn!(tax_id = %customer.tax_id, "Rejected duplicate CPF");
            return Err(DomainError::tax_id_taken(&customer.tax_id));
        }

        self.addresses.get(customer.address_id).await?;

        let saved = self.repos.customers().save(customer).await?;
        info!(tax_id = %saved.tax_id, address_id = saved.address_id, "Customer registered");
        Ok(saved)
    }

    /// Update name, e-mail and address of an existing customer. The CPF
    /// never changes.
    pub async fn update(&self, tax_id: &str, changes: CustomerChanges) -> DomainResult<Customer> {
        let existing = self.get(tax_id).await?;
        self.addresses.get(changes.address_id).await?;

        let updated = self.repos.customers().update(existing.apply(changes)).await?;
        info!(tax_id, address_id = updated.address_id, "Customer updated");
        Ok(updated)
    }

    pub async fn delete(&self, tax_id: &str) -> DomainResult<()> {
        self.get(tax_id).await?;
        self.repos.customers().delete(tax_id).await?;
        info!(tax_id, "Customer deleted");
        Ok(())
    }
}
