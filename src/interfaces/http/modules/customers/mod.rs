//! Customer endpoints (`/v1/cliente`)

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
