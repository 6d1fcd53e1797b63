use crate::compatibility::domain::SupportMatrix;
use crate::shared::Result;
use async_trait::async_trait;

/// SupportFeed port for the OS-support dataset
///
/// This port abstracts the remote feed (e.g. SOFA) mapping hardware
/// models to the OS versions they can run.
#[async_trait]
pub trait SupportFeed: Send + Sync {
    /// Fetches the current support matrix
    ///
    /// # Errors
    /// Returns an error if the feed can't be reached, answers with a
    /// non-success status, or the document is malformed. There is no
    /// cached fallback.
    async fn fetch_matrix(&self) -> Result<SupportMatrix>;
}
