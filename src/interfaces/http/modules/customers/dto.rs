//! Customer DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Customer, CustomerChanges};

/// Registered customer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    #[serde(rename = "cpf")]
    #[schema(example = "12345678900")]
    pub tax_id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "enderecoId")]
    pub address_id: i64,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            tax_id: c.tax_id,
            name: c.name,
            email: c.email,
            address_id: c.address_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[serde(rename = "cpf")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub tax_id: String,
    #[serde(rename = "nome")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub name: String,
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub email: String,
    /// Must reference an existing address
    #[serde(rename = "enderecoId")]
    pub address_id: i64,
}

impl From<CreateCustomerRequest> for Customer {
    fn from(r: CreateCustomerRequest) -> Self {
        Self {
            tax_id: r.tax_id,
            name: r.name,
            email: r.email,
            address_id: r.address_id,
        }
    }
}

/// Body for updating a customer. The CPF comes from the path only; a `cpf`
/// key in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub name: String,
    #[validate(custom(function = "crate::shared::validations::not_blank"))]
    pub email: String,
    #[serde(rename = "enderecoId")]
    pub address_id: i64,
}

impl From<UpdateCustomerRequest> for CustomerChanges {
    fn from(r: UpdateCustomerRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            address_id: r.address_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_drops_cpf() {
        let req: UpdateCustomerRequest = serde_json::from_value(serde_json::json!({
            "cpf": "00000000000",
            "nome": "Novo Nome",
            "email": "novo@mail.com",
            "enderecoId": 1
        }))
        .unwrap();

        let changes = CustomerChanges::from(req);
        assert_eq!(changes.name, "Novo Nome");
        assert_eq!(changes.address_id, 1);
    }

    #[test]
    fn create_request_requires_address_id() {
        let parsed = serde_json::from_value::<CreateCustomerRequest>(serde_json::json!({
            "cpf": "12345678900",
            "nome": "Pablo Marçal",
            "email": "pablomarcal@dinheiro.com"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn blank_name_fails_validation() {
        let req = CreateCustomerRequest {
            tax_id: "12345678900".into(),
            name: "  ".into(),
            email: "pablomarcal@dinheiro.com".into(),
            address_id: 1,
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn response_uses_wire_names() {
        let body = serde_json::to_value(CustomerResponse::from(Customer {
            tax_id: "12345678900".into(),
            name: "Pablo Marçal".into(),
            email: "pablomarcal@dinheiro.com".into(),
            address_id: 1,
        }))
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "cpf": "12345678900",
                "nome": "Pablo Marçal",
                "email": "pablomarcal@dinheiro.com",
                "enderecoId": 1
            })
        );
    }
}
