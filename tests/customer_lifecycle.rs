//! End-to-end service behaviour against a migrated in-memory SQLite database.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;

use toystore_customer::application::{AddressService, CustomerService};
use toystore_customer::domain::{
    AddressData, Customer, CustomerChanges, DomainError, RepositoryProvider,
};
use toystore_customer::infrastructure::database::migrator::Migrator;
use toystore_customer::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

struct Services {
    repos: Arc<dyn RepositoryProvider>,
    addresses: Arc<AddressService>,
    customers: CustomerService,
}

async fn services() -> Services {
    let db = init_database(&DatabaseConfig::sqlite_in_memory())
        .await
        .expect("connect");
    Migrator::up(&db, None).await.expect("migrate");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db));
    let addresses = Arc::new(AddressService::new(repos.clone()));
    let customers = CustomerService::new(repos.clone(), addresses.clone());
    Services {
        repos,
        addresses,
        customers,
    }
}

fn salvador() -> AddressData {
    AddressData {
        postal_code: "12345-678".into(),
        state: "Bahia".into(),
        city: "Salvador".into(),
        district: "Centro".into(),
        street: "Rua das Flores".into(),
        number: Some("123".into()),
    }
}

fn pablo(address_id: i64) -> Customer {
    Customer {
        tax_id: "12345678900".into(),
        name: "Pablo Marçal".into(),
        email: "pablomarcal@dinheiro.com".into(),
        address_id,
    }
}

#[tokio::test]
async fn register_update_and_remove_customer() {
    let s = services().await;

    let address = s.addresses.save(salvador()).await.unwrap();
    assert_eq!(address.id, 1);

    let saved = s.customers.save(pablo(address.id)).await.unwrap();
    assert_eq!(saved.tax_id, "12345678900");

    let fetched = s.customers.get("12345678900").await.unwrap();
    assert_eq!(fetched, saved);
    assert_eq!(fetched.address_id, address.id);

    let err = s.customers.save(pablo(address.id)).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
    assert!(err.to_string().contains("12345678900"));

    let updated = s
        .customers
        .update(
            "12345678900",
            CustomerChanges {
                name: "Novo Nome".into(),
                email: "novo@mail.com".into(),
                address_id: address.id,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Novo Nome");
    assert_eq!(updated.tax_id, "12345678900");

    s.customers.delete("12345678900").await.unwrap();
    let err = s.customers.get("12345678900").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn unknown_address_persists_nothing() {
    let s = services().await;

    let err = s.customers.save(pablo(42)).await.unwrap_err();
    assert_eq!(err, DomainError::not_found("Address", "id", 42));
    assert!(s.customers.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_insert_is_rejected_by_the_table() {
    let s = services().await;
    let address = s.addresses.save(salvador()).await.unwrap();

    s.repos.customers().save(pablo(address.id)).await.unwrap();
    let err = s
        .repos
        .customers()
        .save(pablo(address.id))
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::tax_id_taken("12345678900"));
}

#[tokio::test]
async fn address_ids_increase_and_update_keeps_id() {
    let s = services().await;

    let first = s.addresses.save(salvador()).await.unwrap();
    let second = s.addresses.save(salvador()).await.unwrap();
    assert!(second.id > first.id);

    let mut data = salvador();
    data.number = None;
    let updated = s.addresses.update(first.id, data).await.unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.number, None);

    assert_eq!(s.addresses.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let s = services().await;

    assert!(s.addresses.delete(5).await.unwrap_err().is_not_found());
    assert!(s.customers.delete("000").await.unwrap_err().is_not_found());
    assert!(s
        .customers
        .update(
            "000",
            CustomerChanges {
                name: "N".into(),
                email: "e@x.com".into(),
                address_id: 1,
            },
        )
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn deleting_an_address_leaves_customers_untouched() {
    let s = services().await;
    let address = s.addresses.save(salvador()).await.unwrap();
    s.customers.save(pablo(address.id)).await.unwrap();

    s.addresses.delete(address.id).await.unwrap();

    let customer = s.customers.get("12345678900").await.unwrap();
    assert_eq!(customer.address_id, address.id);
    assert!(s.addresses.get(address.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn ping_reaches_the_database() {
    let s = services().await;
    s.repos.ping().await.unwrap();
}
