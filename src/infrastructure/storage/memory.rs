//! In-memory storage implementation
//!
//! Backs the `--in-memory` mode and the service tests. Single-key operations
//! are atomic through `DashMap`; nothing is persisted.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    Address, AddressData, AddressRepository, Customer, CustomerRepository, DomainError,
    DomainResult, RepositoryProvider,
};

// ── Addresses ───────────────────────────────────────────────────

pub struct InMemoryAddressRepository {
    addresses: DashMap<i64, Address>,
    next_id: AtomicI64,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self {
            addresses: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryAddressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Address>> {
        Ok(self.addresses.get(&id).map(|a| a.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Address>> {
        let mut all: Vec<Address> = self.addresses.iter().map(|a| a.value().clone()).collect();
        all.sort_by_key(|a| a.id);
        Ok(all)
    }

    async fn save(&self, data: AddressData) -> DomainResult<Address> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let address = data.with_id(id);
        self.addresses.insert(id, address.clone());
        Ok(address)
    }

    async fn update(&self, address: Address) -> DomainResult<Address> {
        match self.addresses.get_mut(&address.id) {
            Some(mut stored) => {
                *stored = address.clone();
                Ok(address)
            }
            None => Err(DomainError::not_found("Address", "id", address.id)),
        }
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.addresses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Address", "id", id))
    }
}

// ── Customers ───────────────────────────────────────────────────

pub struct InMemoryCustomerRepository {
    customers: DashMap<String, Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Customer>> {
        Ok(self.customers.get(tax_id).map(|c| c.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let mut all: Vec<Customer> = self.customers.iter().map(|c| c.value().clone()).collect();
        all.sort_by(|a, b| a.tax_id.cmp(&b.tax_id));
        Ok(all)
    }

    async fn save(&self, customer: Customer) -> DomainResult<Customer> {
        match self.customers.entry(customer.tax_id.clone()) {
            Entry::Occupied(_) => Err(DomainError::tax_id_taken(&customer.tax_id)),
            Entry::Vacant(slot) => {
                slot.insert(customer.clone());
                Ok(customer)
            }
        }
    }

    async fn update(&self, customer: Customer) -> DomainResult<Customer> {
        match self.customers.get_mut(&customer.tax_id) {
            Some(mut stored) => {
                *stored = customer.clone();
                Ok(customer)
            }
            None => Err(DomainError::not_found("Customer", "cpf", &customer.tax_id)),
        }
    }

    async fn delete(&self, tax_id: &str) -> DomainResult<()> {
        self.customers
            .remove(tax_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Customer", "cpf", tax_id))
    }
}

// ── Provider ────────────────────────────────────────────────────

/// [`RepositoryProvider`] over the in-memory repositories.
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    addresses: InMemoryAddressRepository,
    customers: InMemoryCustomerRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
    fn addresses(&self) -> &dyn AddressRepository {
        &self.addresses
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}
