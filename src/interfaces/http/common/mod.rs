//! Shared HTTP building blocks: response envelope, error mapping and the
//! extractors that reject bad input inside that envelope.

pub mod error;
pub mod path;
pub mod response;
pub mod validated_json;

pub use error::ApiError;
pub use path::ApiPath;
pub use response::ApiResponse;
pub use validated_json::ValidatedJson;
