/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the report pipeline uses
/// to reach the fleet API, the support feed, and the operator.
pub mod fleet_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod support_feed;

pub use fleet_repository::{FleetRepository, PolicyQuery};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use support_feed::SupportFeed;
