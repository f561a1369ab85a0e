//! Address REST API handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::dto::{AddressRequest, AddressResponse};
use crate::application::AddressService;
use crate::interfaces::http::common::{ApiError, ApiPath, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct AddressState {
    pub service: Arc<AddressService>,
}

#[utoipa::path(
    get,
    path = "/v1/endereco",
    tag = "Addresses",
    responses(
        (status = 200, description = "Every stored address", body = ApiResponse<Vec<AddressResponse>>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_addresses(
    State(state): State<AddressState>,
) -> Result<Json<ApiResponse<Vec<AddressResponse>>>, ApiError> {
    let addresses = state.service.list_all().await?;
    Ok(Json(ApiResponse::success(
        addresses.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/v1/endereco/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address", body = ApiResponse<AddressResponse>),
        (status = 400, description = "Id is not a number"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn get_address(
    State(state): State<AddressState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ApiResponse<AddressResponse>>, ApiError> {
    let address = state.service.get(id).await?;
    Ok(Json(ApiResponse::success(address.into())))
}

#[utoipa::path(
    post,
    path = "/v1/endereco",
    tag = "Addresses",
    request_body = AddressRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<AddressResponse>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Blank required field")
    )
)]
pub async fn create_address(
    State(state): State<AddressState>,
    ValidatedJson(body): ValidatedJson<AddressRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AddressResponse>>), ApiError> {
    let address = state.service.save(body.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(address.into())),
    ))
}

#[utoipa::path(
    put,
    path = "/v1/endereco/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "Address id")),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<AddressResponse>),
        (status = 400, description = "Id is not a number or body is malformed"),
        (status = 404, description = "Address not found"),
        (status = 422, description = "Blank required field")
    )
)]
pub async fn update_address(
    State(state): State<AddressState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(body): ValidatedJson<AddressRequest>,
) -> Result<Json<ApiResponse<AddressResponse>>, ApiError> {
    let address = state.service.update(id, body.into()).await?;
    Ok(Json(ApiResponse::success(address.into())))
}

#[utoipa::path(
    delete,
    path = "/v1/endereco/{id}",
    tag = "Addresses",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Id is not a number"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn delete_address(
    State(state): State<AddressState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
