//! Error types for the output engine.

use thiserror::Error;

/// Caller contract violations raised by the engine's helpers.
///
/// These indicate a bug in the scaffolding logic driving the engine, not a
/// recoverable generation-time condition: callers propagate them out of the
/// run and discard the partially built buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A value handed to the formatter was absent.
    #[error("value to format is missing")]
    MissingValue,
}
