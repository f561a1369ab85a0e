//! Customer REST API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::application::CustomerService;
use crate::interfaces::http::common::{ApiError, ApiPath, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct CustomerState {
    pub service: Arc<CustomerService>,
}

#[utoipa::path(
    get,
    path = "/v1/cliente",
    tag = "Customers",
    responses(
        (status = 200, description = "Every registered customer", body = ApiResponse<Vec<CustomerResponse>>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_customers(
    State(state): State<CustomerState>,
) -> Result<Json<ApiResponse<Vec<CustomerResponse>>>, ApiError> {
    let customers = state.service.list_all().await?;
    Ok(Json(ApiResponse::success(
        customers.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/v1/cliente/{cpf}",
    tag = "Customers",
    params(("cpf" = String, Path, description = "Customer CPF")),
    responses(
        (status = 200, description = "Customer", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<CustomerState>,
    ApiPath(cpf): ApiPath<String>,
) -> Result<Json<ApiResponse<CustomerResponse>>, ApiError> {
    let customer = state.service.get(&cpf).await?;
    Ok(Json(ApiResponse::success(customer.into())))
}

#[utoipa::path(
    post,
    path = "/v1/cliente",
    tag = "Customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Registered", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Referenced address not found"),
        (status = 409, description = "CPF already registered"),
        (status = 422, description = "Blank required field")
    )
)]
pub async fn create_customer(
    State(state): State<CustomerState>,
    ValidatedJson(body): ValidatedJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CustomerResponse>>), ApiError> {
    let customer = state.service.save(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(customer.into())),
    ))
}

#[utoipa::path(
    put,
    path = "/v1/cliente/{cpf}",
    tag = "Customers",
    params(("cpf" = String, Path, description = "Customer CPF")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Customer or referenced address not found"),
        (status = 422, description = "Blank required field")
    )
)]
pub async fn update_customer(
    State(state): State<CustomerState>,
    ApiPath(cpf): ApiPath<String>,
    ValidatedJson(body): ValidatedJson<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, ApiError> {
    let customer = state.service.update(&cpf, body.into()).await?;
    Ok(Json(ApiResponse::success(customer.into())))
}

#[utoipa::path(
    delete,
    path = "/v1/cliente/{cpf}",
    tag = "Customers",
    params(("cpf" = String, Path, description = "Customer CPF")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<CustomerState>,
    ApiPath(cpf): ApiPath<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&cpf).await?;
    Ok(StatusCode::NO_CONTENT)
}
