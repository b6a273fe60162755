/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_request;
mod audit_response;
mod display_options;
mod output_format;

pub use audit_request::AuditRequest;
pub use audit_response::AuditResponse;
pub use display_options::DisplayOptions;
pub use output_format::OutputFormat;
