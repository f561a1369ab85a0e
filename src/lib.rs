//! # Toystore Customer Service
//!
//! Customer and address registry behind a REST API. A customer is keyed by
//! CPF, which must be unique, and must point at an existing address.
//!
//! ## Architecture
//!
//! - **domain**: entities and repository traits
//! - **application**: address and customer services (business rules)
//! - **infrastructure**: SeaORM/SQLite and in-memory repositories
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: errors, validators, graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};

pub use interfaces::http::create_api_router;
