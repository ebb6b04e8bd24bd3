use thiserror::Error;

/// Failures of the icon library bootstrap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// The script could not be fetched or evaluated
    #[error("failed to load icon library from {url}: {reason}")]
    AcquisitionFailure { url: String, reason: String },

    /// The library did not report readiness within the bound
    #[error("icon library not ready after {0} ms")]
    TimeoutExceeded(u32),

    /// The render pass itself threw (e.g. a malformed placeholder)
    #[error("icon render pass failed: {0}")]
    RenderError(String),

    /// `bootstrap()` called again while the first attempt is still loading
    #[error("icon bootstrap already in progress")]
    InProgress,
}
