pub mod addresses;
pub mod customers;
pub mod health;
pub mod metrics;
pub mod request_id;
