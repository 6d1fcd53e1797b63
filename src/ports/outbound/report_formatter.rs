use crate::compatibility::domain::EnrichedDevice;
use crate::shared::Result;

/// ReportFormatter port for rendering the compatibility report
pub trait ReportFormatter {
    /// Renders `devices`, in order, as the report document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, devices: &[EnrichedDevice]) -> Result<String>;
}
