//! Address service: application-layer orchestration
//!
//! HTTP handlers and the customer service go through here; nothing else
//! touches the address repository directly.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Address, AddressData, DomainError, DomainResult, RepositoryProvider};

pub struct AddressService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AddressService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Get an address by id, or `NotFound` naming the id.
    pub async fn get(&self, id: i64) -> DomainResult<Address> {
        self.repos
            .addresses()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Address", "id", id))
    }

    pub async fn list_all(&self) -> DomainResult<Vec<Address>> {
        self.repos.addresses().find_all().await
    }

    /// Register a new address. The id is always assigned by the store.
    pub async fn save(&self, data: AddressData) -> DomainResult<Address> {
        let address = self.repos.addresses().save(data).await?;
        info!(address_id = address.id, "Address registered");
        Ok(address)
    }

    /// Replace every field of an existing address except its id.
    pub async fn update(&self, id: i64, data: AddressData) -> DomainResult<Address> {
        let existing = self.get(id).await?;
        let updated = self.repos.addresses().update(existing.replace(data)).await?;
        info!(address_id = id, "Address updated");
        Ok(updated)
    }

    /// Delete an existing address.
    ///
    /// Customers still pointing at the id are left as they are.
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        self.get(id).await?;
        self.repos.addresses().delete(id).await?;
        info!(address_id = id, "Address deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryRepositoryProvider;

    fn service() -> AddressService {
        AddressService::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn sample_data() -> AddressData {
        AddressData {
            postal_code: "12345-678".into(),
            state: "Bahia".into(),
            city: "Salvador".into(),
            district: "Centro".into(),
            street: "Rua das Flores".into(),
            number: Some("123".into()),
        }
    }

    #[tokio::test]
    async fn save_assigns_id() {
        let svc = service();
        let saved = svc.save(sample_data()).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(svc.get(1).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let err = service().get(99).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Address", "id", 99));
        assert_eq!(err.to_string(), "Not found: Address with id=99");
    }

    #[tokio::test]
    async fn list_all_on_empty_store_is_empty() {
        assert!(service().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_returns_every_address() {
        let svc = service();
        svc.save(sample_data()).await.unwrap();
        svc.save(sample_data()).await.unwrap();
        svc.save(sample_data()).await.unwrap();

        assert_eq!(svc.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let svc = service();
        let saved = svc.save(sample_data()).await.unwrap();

        let updated = svc
            .update(
                saved.id,
                AddressData {
                    street: "Avenida Sete de Setembro".into(),
                    number: None,
                    ..sample_data()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.street, "Avenida Sete de Setembro");
        assert_eq!(updated.number, None);
        assert_eq!(svc.get(saved.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.update(5, sample_data()).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_address() {
        let svc = service();
        let saved = svc.save(sample_data()).await.unwrap();

        svc.delete(saved.id).await.unwrap();

        assert!(svc.get(saved.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let err = service().delete(1).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Address", "id", 1));
    }
}
