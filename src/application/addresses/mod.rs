//! Address module: CRUD orchestration for postal addresses.

pub mod service;

pub use service::AddressService;
