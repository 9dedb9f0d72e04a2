//! Renderer output.

use serde::Serialize;

use super::severity::Severity;

/// A notification rendered for delivery.
///
/// Every channel receives the same instance and picks the representation
/// it can display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub severity: Severity,
    /// Single-line summary.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Compact one-paragraph variant for chat transports.
    pub raw: String,
    /// HTML body.
    pub html: String,
}
