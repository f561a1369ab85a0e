//! Customer aggregate
//!
//! Customers are keyed by CPF (tax ID) and reference exactly one address.

pub mod model;
pub mod repository;

pub use model::{Customer, CustomerChanges};
pub use repository::CustomerRepository;
