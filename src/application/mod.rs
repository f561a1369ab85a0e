//! Application layer: use-case orchestration over the domain repositories.

pub mod addresses;
pub mod customers;

pub use addresses::AddressService;
pub use customers::CustomerService;
