/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod metrics;
pub mod network;
pub mod stream;
