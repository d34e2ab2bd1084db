//! vgen Output Engine
//!
//! Line-oriented, indentation-aware text accumulation for scaffolding
//! templates. Templates drive the engine with alternating literal writes,
//! formatted-value writes, and indent push/pop; the engine re-applies the
//! active indent prefix at every line boundary, under all three newline
//! conventions.
//!
//! # Modules
//!
//! - [`emitter`]: the output engine itself (buffer, indent stack, writes)
//! - [`diagnostic`]: advisory error/warning records, a pure side channel
//! - [`value`]: culture-invariant value formatting for interpolation
//! - [`error`]: caller contract violations

pub mod diagnostic;
pub mod emitter;
pub mod error;
pub mod value;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{EmitConfig, Newline, TemplateEmitter};
pub use error::EmitError;
pub use value::{FormatStyle, TemplateValue, ValueFormatter};
