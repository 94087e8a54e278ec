/// Crate-wide result type. Ports, services and use cases all return this;
/// typed causes travel inside as `MonitorError` and are recovered by downcasting.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
