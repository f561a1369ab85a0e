//! Address endpoints (`/v1/endereco`)

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
