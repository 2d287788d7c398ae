//! Application state for Axum handlers.

use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::AppConfig;
use crate::service::{DocumentService, RemessaService, TrackingService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Prometheus exposition handle.
    pub metrics: PrometheusHandle,
    /// Document validation service.
    pub document_service: Arc<DocumentService>,
    /// Tracking-number service.
    pub tracking_service: Arc<TrackingService>,
    /// Remessa/retorno file service.
    pub remessa_service: Arc<RemessaService>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        let remessa_service = Arc::new(RemessaService::new(&config.remessa));

        Self {
            metrics: metrics_handle(),
            document_service: Arc::new(DocumentService::new()),
            tracking_service: Arc::new(TrackingService::new()),
            remessa_service,
            config,
        }
    }
}

/// Install the Prometheus recorder once per process.
///
/// Test binaries build many states; every one shares the same recorder.
fn metrics_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}
