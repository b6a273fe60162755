/// Result alias used across py-licenses.
///
/// Errors are `anyhow::Error`; typed failures are `LicenseAuditError`
/// values that the binary downcasts to choose an exit code.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
