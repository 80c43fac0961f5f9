use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use support_match::config::AppConfig;
use support_match::error::AppError;
use support_match::recommendations::RecommendationService;
use support_match::telemetry;
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

    let service = Arc::new(RecommendationService::from_config(&config.recommender)?);
    info!(
        catalog_version = service.catalog().version(),
        templates = service.catalog().len(),
        remote = service.remote_enabled(),
        timeout_ms = config.recommender.timeout.as_millis() as u64,
        "recommendation service configured"
    );

    let app = with_recommendation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "support match service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
