use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use support_match::error::AppError;
use support_match::profile::UserProfile;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read a profile document in the form collaborator's JSON shape.
pub(crate) fn load_profile(path: &Path) -> Result<UserProfile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_profile(&raw)
}

pub(crate) fn parse_profile(raw: &str) -> Result<UserProfile, AppError> {
    Ok(serde_json::from_str(raw)?)
}
