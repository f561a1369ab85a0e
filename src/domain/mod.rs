//! Domain layer: entities and repository interfaces.

pub mod address;
pub mod customer;
pub mod repositories;

// Re-export commonly used types
pub use address::{Address, AddressData, AddressRepository};
pub use customer::{Customer, CustomerChanges, CustomerRepository};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::errors::DomainError;
