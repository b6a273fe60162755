/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the Python environment, the
/// terminal and the filesystem.
pub mod outbound;
