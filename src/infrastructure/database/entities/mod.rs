//! Database entities module

pub mod address;
pub mod customer;

pub use address::Entity as Address;
pub use customer::Entity as Customer;
