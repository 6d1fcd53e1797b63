/// ProgressReporter port for operator feedback during a report run
///
/// Fetching a large fleet takes minutes; this port keeps the operator
/// informed without coupling the use case to a terminal.
pub trait ProgressReporter {
    /// Reports a stage message
    fn report(&self, message: &str);

    /// Reports per-device progress
    ///
    /// # Arguments
    /// * `current` - Devices processed so far
    /// * `total` - Devices to process
    /// * `message` - Optional detail, such as the device name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a recoverable error
    fn report_error(&self, message: &str);

    /// Reports completion of a stage
    fn report_completion(&self, message: &str);
}
