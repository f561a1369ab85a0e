//! Address aggregate
//!
//! Postal addresses referenced by customers. Identified by a store-assigned id.

pub mod model;
pub mod repository;

pub use model::{Address, AddressData};
pub use repository::AddressRepository;
