//! Customer module: customer registration and maintenance.
//!
//! Enforces CPF uniqueness and that every customer points at an existing
//! address.

pub mod service;

pub use service::CustomerService;
