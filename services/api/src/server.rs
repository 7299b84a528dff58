use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDocumentStore};
use crate::routes::with_lead_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dental_leads::config::AppConfig;
use dental_leads::error::AppError;
use dental_leads::telemetry;
use dental_leads::workflows::lead_intake::LeadIntakeService;
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
    let app_state = AppState {
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryDocumentStore::default());
    let intake_service = Arc::new(LeadIntakeService::new(store, &config.storage));

    let app = with_lead_routes(intake_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        ?config.environment,
        %addr,
        collection = %config.storage.leads_collection,
        "dental leads backend ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
