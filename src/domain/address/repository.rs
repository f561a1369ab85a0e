//! Address repository interface

use async_trait::async_trait;

use super::model::{Address, AddressData};
use crate::domain::DomainResult;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Address>>;
    async fn find_all(&self) -> DomainResult<Vec<Address>>;
    /// Inserts a new address; the store assigns the id.
    async fn save(&self, data: AddressData) -> DomainResult<Address>;
    /// Replaces an existing address. NotFound if the id is unknown.
    async fn update(&self, address: Address) -> DomainResult<Address>;
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
