/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the use
/// cases depend on. Inbound traffic arrives through the HTTP adapter, which
/// calls the use cases directly.
pub mod outbound;
