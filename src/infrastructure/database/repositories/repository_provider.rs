//! SeaORM implementation of RepositoryProvider

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{AddressRepository, CustomerRepository, DomainResult};

use super::address_repository::SeaOrmAddressRepository;
use super::customer_repository::SeaOrmCustomerRepository;
use super::db_err;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let address = repos.addresses().find_by_id(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    addresses: SeaOrmAddressRepository,
    customers: SeaOrmCustomerRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            addresses: SeaOrmAddressRepository::new(db.clone()),
            customers: SeaOrmCustomerRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn addresses(&self) -> &dyn AddressRepository {
        &self.addresses
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db.ping().await.map_err(db_err)
    }
}
