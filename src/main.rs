//! App Shell server binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app_shell::adapters::http::{app_router, ShellAppState};
use app_shell::adapters::{
    postgres, session_layer, CookieCsrfTokenService, InMemoryEventBus,
    InMemoryOrganizationRepository, InMemoryProjectRepository, OnboardingLogHandler,
    PostgresOrganizationRepository, PostgresProjectRepository, RinjaTemplateRenderer,
};
use app_shell::config::AppConfig;
use app_shell::domain::shell::FIRST_EVENT_PENDING;
use app_shell::ports::{EventSubscriber, OrganizationRepository, ProjectRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let (organizations, projects): (Arc<dyn OrganizationRepository>, Arc<dyn ProjectRepository>) =
        match &config.database {
            Some(database) => {
                let pool = postgres::connect(database).await?;
                info!("Using PostgreSQL repositories");
                (
                    Arc::new(PostgresOrganizationRepository::new(pool.clone())),
                    Arc::new(PostgresProjectRepository::new(pool)),
                )
            }
            None => {
                warn!("No database configured; organization routes will answer 404");
                (
                    Arc::new(InMemoryOrganizationRepository::new()),
                    Arc::new(InMemoryProjectRepository::new()),
                )
            }
        };

    let event_bus = Arc::new(InMemoryEventBus::new());
    event_bus.subscribe(FIRST_EVENT_PENDING, Arc::new(OnboardingLogHandler::new()));

    let state = ShellAppState {
        csrf_cookie_name: config.csrf.cookie_name.clone(),
        templates: Arc::new(RinjaTemplateRenderer::new()),
        csrf: Arc::new(CookieCsrfTokenService::from_config(&config.csrf)),
        projects,
        organizations,
        event_publisher: event_bus,
    };
    let app = app_router(
        state,
        session_layer(&config.session),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "App shell listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("App shell stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over config.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
