//! mac-compat - macOS compatibility report for an Addigy fleet
//!
//! This library lists every device managed in Addigy, resolves each device's
//! policy name, and looks up the newest macOS its hardware supports in the
//! SOFA feed. The result is a CSV report, following hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compatibility`): Device facts, policies, the support matrix and pure services
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mac_compat::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let fleet_repository = AddigyClient::new("api-key")?;
//! let support_feed = SofaClient::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(fleet_repository, support_feed, progress_reporter);
//!
//! // Execute
//! let response = use_case.execute(ReportRequest::all_devices()).await?;
//!
//! // Format output
//! let output = CsvFormatter::new().format(&response.devices)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compatibility;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::CsvFormatter;
    pub use crate::adapters::outbound::network::{AddigyClient, SofaClient};
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{GenerateReportUseCase, PolicyResolver};
    pub use crate::compatibility::domain::{
        latest_compatible_os, DeviceFact, DeviceQuery, DeviceSearchFilter, EnrichedDevice,
        FactValue, FleetDevice, LatestCompatibleOs, MacModel, Policy, PolicyCache, SupportMatrix,
    };
    pub use crate::compatibility::services::{DeviceEnricher, OsVersionFilter};
    pub use crate::ports::outbound::{
        FleetRepository, OutputPresenter, PolicyQuery, ProgressReporter, ReportFormatter,
        SupportFeed,
    };
    pub use crate::shared::error::{CompatError, ExitCode};
    pub use crate::shared::Result;
}
