//! Server runtime
//!
//! [`ServerHandle`] owns the full lifecycle: storage, migrations, services,
//! the REST API and graceful shutdown.

use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{AddressService, CustomerService};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{
    init_database, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};
use crate::interfaces::http::create_api_router;
use crate::shared::errors::InfraError;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
    /// Keep everything in process memory instead of SQLite (default: false).
    pub in_memory: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
            in_memory: false,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running customer service.
///
/// ```rust,no_run
/// use toystore_customer::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,
    /// Port the API actually bound, which differs from the configured one
    /// when that is 0.
    pub api_port: u16,

    db: Option<DatabaseConnection>,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub async fn start(opts: ServerOptions) -> Result<Self, InfraError> {
        let app_cfg = opts.config;

        info!("Starting customer service...");

        let prometheus_handle = prometheus_handle();

        // Bind before touching storage so a taken port leaves nothing open.
        let api_addr = app_cfg.server.api_address();
        let listener = tokio::net::TcpListener::bind(&api_addr).await?;
        let local_addr = listener.local_addr()?;

        // ── Storage ────────────────────────────────────────────
        let (repos, db): (Arc<dyn RepositoryProvider>, Option<DatabaseConnection>) =
            if opts.in_memory {
                warn!("Using in-memory storage; data is lost on exit");
                (Arc::new(InMemoryRepositoryProvider::new()), None)
            } else {
                let db = init_database(&app_cfg.database).await?;
                if opts.auto_migrate {
                    info!("Running database migrations...");
                    if let Err(e) = Migrator::up(&db, None).await {
                        error!("Migrations failed: {}", e);
                        if let Err(close_err) = db.close().await {
                            warn!("Error closing database connection: {}", close_err);
                        }
                        return Err(e.into());
                    }
                    info!("Migrations completed");
                }
                (
                    Arc::new(SeaOrmRepositoryProvider::new(db.clone())),
                    Some(db),
                )
            };

        // ── Services ───────────────────────────────────────────
        let address_service = Arc::new(AddressService::new(repos.clone()));
        let customer_service = Arc::new(CustomerService::new(
            repos.clone(),
            address_service.clone(),
        ));

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(
            repos.clone(),
            address_service,
            customer_service,
            prometheus_handle,
        );

        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config: app_cfg,
            api_port: local_addr.port(),
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for in-flight requests to drain, bounded by the configured
    /// shutdown timeout, then close the database.
    pub async fn wait(self) {
        let ServerHandle {
            db,
            shutdown,
            api_task,
            ..
        } = self;

        info!("Waiting for server tasks to complete...");
        let drained = shutdown
            .cleanup_with_timeout(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;
        if !drained {
            warn!("Some requests were still in flight at shutdown");
        }

        if let Some(db) = db {
            match db.close().await {
                Ok(()) => info!("Database connection closed"),
                Err(e) => warn!("Error closing database connection: {}", e),
            }
        }

        info!("Customer service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("Shutting down customer service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// The global metrics recorder can only be installed once per process, so a
/// restart within the same process reuses the first handle.
fn prometheus_handle() -> PrometheusHandle {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder installed");
                handle
            }
            Err(e) => {
                warn!("Failed to install Prometheus recorder: {}; /metrics will be empty", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// Initialize tracing from the application config.
///
/// Call once at process startup, before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
