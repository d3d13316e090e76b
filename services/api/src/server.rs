use crate::cli::ServeArgs;
use crate::infra::{
    seed_preferences, AppState, InMemoryPreferenceStore, InMemorySessionRepository,
    PreferenceBackedQuestionSource,
};
use crate::routes::with_practice_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use interview_ai::config::AppConfig;
use interview_ai::error::AppError;
use interview_ai::telemetry;
use interview_ai::workflows::practice::PracticeSessionService;
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

    let repository = Arc::new(InMemorySessionRepository::default());
    let preferences = Arc::new(InMemoryPreferenceStore::default());
    seed_preferences(&preferences, &config.practice);
    let source = Arc::new(PreferenceBackedQuestionSource::new(preferences));
    let session_service = Arc::new(PracticeSessionService::new(repository, source));

    let app = with_practice_routes(session_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "interview practice service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
