use crate::cli::ServeArgs;
use crate::infra::{load_configured_roster, AppState};
use crate::routes::with_roster_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use crew_rotation::config::AppConfig;
use crew_rotation::error::AppError;
use crew_rotation::telemetry;
use crew_rotation::workflows::roster::RosterService;
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

    let roster = Arc::new(load_configured_roster(config.roster.data_files.as_ref())?);
    info!(
        technicians = roster.technician_count(),
        trips = roster.trip_count(),
        shortlist_size = config.roster.shortlist_size,
        "roster loaded"
    );
    let roster_service = Arc::new(RosterService::new(
        roster,
        config.roster.processor(),
        config.roster.scorer(),
    ));

    let app = with_roster_routes(roster_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "crew rotation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
