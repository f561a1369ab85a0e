//! In-memory repository implementations

mod memory;

pub use memory::{InMemoryAddressRepository, InMemoryCustomerRepository, InMemoryRepositoryProvider};
