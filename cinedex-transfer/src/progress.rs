//! Transfer progress reporting.

/// Trait for receiving import/export progress updates.
pub trait TransferProgress {
    /// Called when a phase starts (e.g., "Reading movies.json").
    fn on_phase(&self, message: &str);

    /// Called when the transfer is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl TransferProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl TransferProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::debug!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
