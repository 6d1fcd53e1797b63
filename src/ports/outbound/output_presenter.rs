use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// This port abstracts the destination (file, stdout) of the report.
pub trait OutputPresenter {
    /// Writes the rendered report to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination is not writable
    /// - The destination is a symbolic link
    /// - Writing fails part-way
    fn present(&self, content: &str) -> Result<()>;
}
