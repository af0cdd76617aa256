//! Progress reporting trait for the scan.
//!
//! Decouples progress reporting from any specific rendering backend so the
//! pipeline can run under an `indicatif` spinner, log-only output, or
//! silently in tests. Rendering implementations live upstream.

use std::sync::Arc;

/// Trait for reporting scan progress.
///
/// Implementations must be `Send + Sync` for `Arc`-based sharing.
pub trait ProgressCallback: Send + Sync {
    /// Advance progress by `delta` units.
    fn inc(&self, delta: u64);

    /// Update the message displayed alongside the progress indicator.
    fn set_message(&self, msg: String);

    /// Mark progress as complete with a final message.
    fn finish(&self, msg: String);
}

/// A no-op [`ProgressCallback`] that ignores all updates.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// Returns a shared [`NullProgress`] instance for convenient use.
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
