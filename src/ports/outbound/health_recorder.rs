/// UpstreamHealthRecorder port for publishing dependency health
///
/// Implemented by the metrics adapter. The handle is created once at startup
/// and shared, never reset.
pub trait UpstreamHealthRecorder: Send + Sync {
    fn record(&self, service: &str, healthy: bool);
}
