/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod unify_request;
mod unify_response;
mod validate_request;
mod validate_response;

pub use output_format::OutputFormat;
pub use unify_request::UnifyRequest;
pub use unify_response::UnifyResponse;
pub use validate_request::{ValidateRequest, DEFAULT_VCS_TIMEOUT};
pub use validate_response::ValidateResponse;
