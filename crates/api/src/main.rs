use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showtime_api::config::{ServerConfig, StoreBackend};
use showtime_api::router::build_app_router;
use showtime_api::state::AppState;
use showtime_db::{DocumentStore, InMemoryDocumentStore, PgDocumentStore};
use showtime_events::{EmailConfig, EmailDelivery, NotificationSender, UnconfiguredSender};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showtime_api=debug,showtime_events=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = config.port,
        in_memory = matches!(config.store, StoreBackend::Memory),
        "Configuration loaded"
    );

    let store = open_store(&config.store).await;
    let mailer = open_mailer();

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        mailer,
    };

    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Connect the configured document store. Postgres is checked and
/// migrated before the server accepts traffic.
async fn open_store(backend: &StoreBackend) -> Arc<dyn DocumentStore> {
    let StoreBackend::Postgres { database_url } = backend else {
        tracing::warn!("STORE_BACKEND=memory: documents are lost on exit");
        return Arc::new(InMemoryDocumentStore::new());
    };

    let pool = showtime_db::create_pool(database_url)
        .await
        .expect("Failed to connect to database");
    showtime_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    showtime_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    Arc::new(PgDocumentStore::new(pool))
}

fn open_mailer() -> Arc<dyn NotificationSender> {
    match EmailConfig::from_env() {
        Some(email) => Arc::new(EmailDelivery::new(email).expect("Invalid SMTP configuration")),
        None => {
            tracing::warn!("SMTP_HOST not set; payment confirmations will fail");
            Arc::new(UnconfiguredSender)
        }
    }
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
