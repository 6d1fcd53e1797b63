/// Data Transfer Objects for application layer
///
/// DTOs carry the report request in from the CLI and the enriched
/// devices back out, keeping the domain layer isolated.
mod report_request;
mod report_response;

pub use report_request::{ReportRequest, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use report_response::ReportResponse;
