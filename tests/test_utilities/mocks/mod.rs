/// Mock implementations for testing
mod mock_fleet_repository;
mod mock_progress_reporter;
mod mock_support_feed;

pub use mock_fleet_repository::MockFleetRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_support_feed::MockSupportFeed;
