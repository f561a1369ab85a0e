//! Address DTOs
//!
//! Wire names follow the public API (`cep`, `estado`, ...).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Address, AddressData};

/// Stored address
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddressResponse {
    pub id: i64,
    #[serde(rename = "cep")]
    #[schema(example = "12345-678")]
    pub postal_code: String,
    #[serde(rename = "estado")]
    pub state: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "bairro")]
    pub district: String,
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: Option<String>,
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            postal_code: a.postal_code,
            state: a.state,
            city: a.city,
            district: a.district,
            street: a.street,
            number: a.number,
        }
    }
}

/// Body for creating or replacing an address. An `id` in the payload is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddressRequest {
    #[serde(rename = "cep")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub postal_code: String,
    #[serde(rename = "estado")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub state: String,
    #[serde(rename = "cidade")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub city: String,
    #[serde(rename = "bairro")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub district: String,
    #[serde(rename = "rua")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub street: String,
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
}

impl From<AddressRequest> for AddressData {
    fn from(r: AddressRequest) -> Self {
        Self {
            postal_code: r.postal_code,
            state: r.state,
            city: r.city,
            district: r.district,
            street: r.street,
            number: r.number,
        }
    }
}
