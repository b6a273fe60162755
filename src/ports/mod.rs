/// Ports layer - Interfaces between the application and infrastructure
///
/// Outbound ports are implemented by adapters and injected into use cases.
pub mod outbound;
