use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_compliance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use clinical_compliance::compliance::ComplianceApiState;
use clinical_compliance::config::AppConfig;
use clinical_compliance::error::AppError;
use clinical_compliance::telemetry::{self, LogOutput};
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

    telemetry::init(&config.telemetry, LogOutput::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let compliance_state = Arc::new(ComplianceApiState::new(config.compliance.pinned_as_of));

    let app = with_compliance_routes(compliance_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        pinned_as_of = ?config.compliance.pinned_as_of,
        "compliance service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
