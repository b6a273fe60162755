/// License audit domain layer
///
/// Pure license resolution and policy logic. Nothing in this module
/// performs I/O; package metadata is supplied through the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
