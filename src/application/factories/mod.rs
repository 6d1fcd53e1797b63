/// Factories for selecting infrastructure adapters
mod presenter_factory;

pub use presenter_factory::{PresenterFactory, PresenterType, DEFAULT_REPORT_FILENAME};
