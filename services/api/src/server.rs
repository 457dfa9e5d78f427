use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryListingStore};
use crate::routes::with_board_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jobportal::board::listings::{CatalogService, ListingCsvImporter};
use jobportal::board::router::BoardState;
use jobportal::board::session::SessionManager;
use jobportal::config::AppConfig;
use jobportal::error::AppError;
use jobportal::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryListingStore::seeded());
    let catalog = CatalogService::new(store);

    if let Some(path) = args.jobs_csv.take() {
        let rows = ListingCsvImporter::from_path(&path)?;
        let imported = catalog.import_jobs(rows)?;
        info!(count = imported.len(), path = %path.display(), "hydrated catalog from listings export");
    }

    let sessions = Arc::new(SessionManager::new(config.session.simulated_latency()));
    let board_state = BoardState { sessions, catalog };

    let app = with_board_routes(board_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job board service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
