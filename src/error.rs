use thiserror::Error;

/// Failure modes of one picker invocation.
///
/// Every variant is terminal for the invocation and reads as "keep the
/// previous display" to callers that don't inspect it; the variants exist so
/// diagnostics can tell a declined dialog from a platform that reported no
/// displays.
#[derive(Debug, Error)]
pub enum PickError {
    /// The platform reported an error or zero displays while enumerating.
    #[error("display enumeration failed: {0}")]
    EnumerationFailed(anyhow::Error),

    /// The GUI runtime could not create the dialog window.
    #[error("failed to open the picker dialog: {0}")]
    WindowFailed(String),

    /// The user dismissed the dialog without confirming a display.
    #[error("monitor selection was cancelled")]
    Cancelled,
}
