//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::addresses::{self, AddressState};
use super::modules::customers::{self, CustomerState};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use crate::application::{AddressService, CustomerService};
use crate::domain::RepositoryProvider;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        addresses::list_addresses,
        addresses::get_address,
        addresses::create_address,
        addresses::update_address,
        addresses::delete_address,
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            addresses::AddressRequest,
            addresses::AddressResponse,
            customers::CreateCustomerRequest,
            customers::UpdateCustomerRequest,
            customers::CustomerResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Addresses", description = "Postal address registry (endereco)"),
        (name = "Customers", description = "Customer registry keyed by CPF (cliente)"),
    ),
    info(
        title = "Toystore Customer API",
        version = "1.0.0",
        description = "REST API for customers and their addresses"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    address_service: Arc<AddressService>,
    customer_service: Arc<CustomerService>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let address_routes = Router::new()
        .route(
            "/v1/endereco",
            get(addresses::list_addresses).post(addresses::create_address),
        )
        .route(
            "/v1/endereco/{id}",
            get(addresses::get_address)
                .put(addresses::update_address)
                .delete(addresses::delete_address),
        )
        .with_state(AddressState {
            service: address_service,
        });

    let customer_routes = Router::new()
        .route(
            "/v1/cliente",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/v1/cliente/{cpf}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .with_state(CustomerState {
            service: customer_service,
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            repos,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: prometheus_handle,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .merge(metrics_routes)
        .merge(address_routes)
        .merge(customer_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use async_trait::async_trait;

    use crate::domain::{AddressRepository, CustomerRepository, DomainError, DomainResult};
    use crate::infrastructure::InMemoryRepositoryProvider;

    fn app_with(repos: Arc<dyn RepositoryProvider>, handle: PrometheusHandle) -> Router {
        let addresses = Arc::new(AddressService::new(repos.clone()));
        let customers = Arc::new(CustomerService::new(repos.clone(), addresses.clone()));
        create_api_router(repos, addresses, customers, handle)
    }

    fn app() -> Router {
        app_with(
            Arc::new(InMemoryRepositoryProvider::new()),
            PrometheusBuilder::new().build_recorder().handle(),
        )
    }

    /// Store whose backend does not answer pings.
    #[derive(Default)]
    struct UnreachableStore {
        inner: InMemoryRepositoryProvider,
    }

    #[async_trait]
    impl RepositoryProvider for UnreachableStore {
        fn addresses(&self) -> &dyn AddressRepository {
            self.inner.addresses()
        }

        fn customers(&self) -> &dyn CustomerRepository {
            self.inner.customers()
        }

        async fn ping(&self) -> DomainResult<()> {
            Err(DomainError::Storage("connection refused".into()))
        }
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(req).await.unwrap()
    }

    async fn json_body(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn address() -> Value {
        json!({
            "cep": "12345-678",
            "estado": "Bahia",
            "cidade": "Salvador",
            "bairro": "Centro",
            "rua": "Rua das Flores",
            "numero": "123"
        })
    }

    fn customer() -> Value {
        json!({
            "cpf": "12345678900",
            "nome": "Pablo Marçal",
            "email": "pablomarcal@dinheiro.com",
            "enderecoId": 1
        })
    }

    #[tokio::test]
    async fn customer_lifecycle_over_http() {
        let app = app();

        let resp = call(&app, "POST", "/v1/endereco", Some(address())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = json_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);

        let resp = call(&app, "POST", "/v1/cliente", Some(customer())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(json_body(resp).await["data"]["cpf"], "12345678900");

        let resp = call(&app, "POST", "/v1/cliente", Some(customer())).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("12345678900"));

        let resp = call(
            &app,
            "PUT",
            "/v1/cliente/12345678900",
            Some(json!({
                "cpf": "99999999999",
                "nome": "Novo Nome",
                "email": "novo@mail.com",
                "enderecoId": 1
            })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["data"]["nome"], "Novo Nome");
        assert_eq!(body["data"]["cpf"], "12345678900");

        let resp = call(&app, "DELETE", "/v1/cliente/12345678900", None).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = call(&app, "GET", "/v1/cliente/12345678900", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(json_body(resp).await["error"]
            .as_str()
            .unwrap()
            .contains("12345678900"));
    }

    #[tokio::test]
    async fn customer_with_unknown_address_is_404() {
        let app = app();

        let resp = call(&app, "POST", "/v1/cliente", Some(customer())).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(json_body(resp).await["error"]
            .as_str()
            .unwrap()
            .contains("Address"));

        let resp = call(&app, "GET", "/v1/cliente", None).await;
        assert_eq!(json_body(resp).await["data"], json!([]));
    }

    #[tokio::test]
    async fn blank_field_is_422() {
        let app = app();
        let mut body = address();
        body["cidade"] = json!("  ");

        let resp = call(&app, "POST", "/v1/endereco", Some(body)).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(resp).await["error"]
            .as_str()
            .unwrap()
            .contains("must not be blank"));
    }

    #[tokio::test]
    async fn missing_address_reference_is_400() {
        let app = app();
        let resp = call(
            &app,
            "POST",
            "/v1/cliente",
            Some(json!({"cpf": "1", "nome": "A", "email": "a@b.c"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn address_update_keeps_path_id() {
        let app = app();
        call(&app, "POST", "/v1/endereco", Some(address())).await;

        let mut body = address();
        body["id"] = json!(42);
        body["rua"] = json!("Avenida Sete");
        let resp = call(&app, "PUT", "/v1/endereco/1", Some(body)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["rua"], "Avenida Sete");

        let resp = call(&app, "GET", "/v1/endereco/42", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_unknown_address_is_404() {
        let app = app();
        let resp = call(&app, "DELETE", "/v1/endereco/7", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = call(&app(), "GET", "/health", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"]["status"], "ok");
    }

    #[tokio::test]
    async fn health_is_degraded_when_store_is_down() {
        let app = app_with(
            Arc::new(UnreachableStore::default()),
            PrometheusBuilder::new().build_recorder().handle(),
        );

        let resp = call(&app, "GET", "/health", None).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_body(resp).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["storage"]["status"], "error");
        assert!(body["storage"]["latency_ms"].is_null());
    }

    #[tokio::test]
    async fn non_numeric_address_id_is_400_envelope() {
        let app = app();

        for method in ["GET", "DELETE"] {
            let resp = call(&app, method, "/v1/endereco/abc", None).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body = json_body(resp).await;
            assert_eq!(body["success"], false);
            assert!(body["data"].is_null());
            assert!(body["error"].as_str().unwrap().starts_with("Invalid path"));
        }

        let resp = call(&app, "PUT", "/v1/endereco/abc", Some(address())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["success"], false);
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let router = app();
        let req = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = router.oneshot(req).await.unwrap();
        assert_eq!(resp.headers()["x-request-id"], "abc-123");

        let resp = call(&app(), "GET", "/health", None).await;
        assert!(resp.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() {
        let resp = call(&app(), "GET", "/api-doc/openapi.json", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert!(body["paths"]["/v1/cliente/{cpf}"].is_object());
        assert!(body["paths"]["/v1/endereco"].is_object());
    }

    #[test]
    fn requests_are_counted() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let app = app_with(Arc::new(InMemoryRepositoryProvider::new()), handle.clone());

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let status = metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async { call(&app, "GET", "/health", None).await.status() })
        });
        assert_eq!(status, StatusCode::OK);

        let rendered = handle.render();
        assert!(rendered.contains(r#"http_requests_total{method="GET",path="/health""#));
        assert!(rendered.contains("http_request_duration_seconds"));
    }

    #[tokio::test]
    async fn metrics_endpoint_serves_text() {
        let resp = call(&app(), "GET", "/metrics", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
