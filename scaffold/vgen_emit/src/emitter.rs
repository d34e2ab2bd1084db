//! Template Output Engine
//!
//! The engine accumulates generated text while tracking a stack of
//! indentation prefixes. Every line started inside a write — under any of
//! the three newline conventions (`\n`, `\r`, `\r\n`) — receives the
//! currently active prefix, including lines whose start is deferred to a
//! later write by a trailing newline.

use crate::diagnostic::Diagnostic;

/// Newline sequence appended by [`TemplateEmitter::write_line`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Newline {
    /// Unix-style `\n` (default).
    #[default]
    Lf,
    /// Windows-style `\r\n`.
    CrLf,
}

impl Newline {
    /// The literal newline sequence.
    pub fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::CrLf => "\r\n",
        }
    }
}

/// Configuration for the output engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EmitConfig {
    /// Newline sequence used by `write_line`.
    pub newline: Newline,
}

impl EmitConfig {
    /// Create a config with the given newline sequence.
    pub fn with_newline(newline: Newline) -> Self {
        Self { newline }
    }
}

/// Indentation-aware output engine for one generation run.
///
/// Owns the growing output buffer, the indent stack, and the
/// "buffer currently ends with a newline" flag. Callers alternate literal
/// writes, formatted-value writes, and indent push/pop; the engine
/// transparently re-applies the active indent prefix at every line
/// boundary.
///
/// The engine is single-threaded and synchronous: every operation is a pure
/// in-memory mutation. Use one instance per concurrent generation run.
#[derive(Default)]
pub struct TemplateEmitter {
    buffer: String,
    /// Byte lengths of pushed indent segments, top of stack last.
    /// Invariant: their sum equals `indent.len()`.
    indents: Vec<usize>,
    /// Concatenation of active indent segments in push order.
    indent: String,
    /// True iff the last character appended was `\n` or `\r`.
    ends_with_newline: bool,
    diagnostics: Vec<Diagnostic>,
    config: EmitConfig,
}

impl TemplateEmitter {
    /// Create a new emitter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an emitter with a specific configuration.
    pub fn with_config(config: EmitConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create with pre-allocated capacity for the output buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> EmitConfig {
        self.config
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The currently active indent prefix.
    pub fn current_indent(&self) -> &str {
        &self.indent
    }

    /// Clear the buffer and the newline flag for a fresh generation run.
    ///
    /// Indent scopes and diagnostics are left in place; callers that
    /// balance push/pop within a run start the next run unaffected.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.ends_with_newline = false;
    }

    /// Append `text` to the output, re-indenting every line started inside
    /// it.
    ///
    /// Empty input is a no-op. A line break is `\r\n`, a lone `\r`, or a
    /// lone `\n`; each break strictly before the end of `text` causes
    /// exactly one re-indent. A break that ends `text` is not re-indented
    /// here — the next write picks it up through the newline flag, so the
    /// boundary is never indented twice.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if (self.buffer.is_empty() || self.ends_with_newline) && !self.indent.is_empty() {
            self.buffer.push_str(&self.indent);
        }
        let bytes = text.as_bytes();
        self.ends_with_newline = matches!(bytes[bytes.len() - 1], b'\n' | b'\r');
        if self.indent.is_empty() {
            // Fast path: no per-line scanning needed.
            self.buffer.push_str(text);
            return;
        }
        let last_index = bytes.len() - 1;
        let mut emitted = 0;
        let mut i = 0;
        while i < last_index {
            match bytes[i] {
                b'\r' => {
                    if bytes[i + 1] == b'\n' {
                        i += 1;
                        if i == last_index {
                            // Trailing \r\n lands exactly at the end: the
                            // next write's leading-indent rule handles it.
                            break;
                        }
                    }
                }
                b'\n' => {}
                _ => {
                    i += 1;
                    continue;
                }
            }
            // Include the break, then re-indent the next line.
            i += 1;
            self.buffer.push_str(&text[emitted..i]);
            self.buffer.push_str(&self.indent);
            emitted = i;
        }
        self.buffer.push_str(&text[emitted..]);
    }

    /// `write(text)` followed by the configured newline sequence.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.buffer.push_str(self.config.newline.as_str());
        self.ends_with_newline = true;
    }

    /// Enter an indent scope: future lines gain `segment` as an extra
    /// prefix. Previously written text is unaffected.
    pub fn push_indent(&mut self, segment: &str) {
        self.indents.push(segment.len());
        self.indent.push_str(segment);
    }

    /// Exit the innermost indent scope, returning the removed segment.
    ///
    /// Popping with nothing pushed is not an error: it returns an empty
    /// string and leaves the prefix unchanged, keeping the engine robust
    /// against unbalanced push/pop calls.
    pub fn pop_indent(&mut self) -> String {
        match self.indents.pop() {
            Some(len) => self.indent.split_off(self.indent.len() - len),
            None => String::new(),
        }
    }

    /// Drop all indent scopes unconditionally.
    pub fn clear_indent(&mut self) {
        self.indent.clear();
        self.indents.clear();
    }

    /// Record an error diagnostic. Advisory only: never alters the buffer
    /// or halts generation.
    pub fn error(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(message));
    }

    /// Record a warning diagnostic.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(message));
    }

    /// Diagnostics recorded so far, in call order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check whether any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.is_warning())
    }

    /// Consume the emitter and return the generated text.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Consume the emitter and return the generated text together with the
    /// diagnostic side channel.
    pub fn into_parts(self) -> (String, Vec<Diagnostic>) {
        (self.buffer, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_without_indent_is_concatenation() {
        let mut out = TemplateEmitter::new();
        out.write("alpha");
        out.write(" beta\n");
        out.write("gamma");
        assert_eq!(out.as_str(), "alpha beta\ngamma");
    }

    #[test]
    fn empty_write_is_a_noop() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("A\n");
        out.write("");
        out.write("B");
        assert_eq!(out.as_str(), "\tA\n\tB");
    }

    #[test]
    fn indent_reapplied_after_every_internal_break() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("A\nB\nC");
        assert_eq!(out.as_str(), "\tA\n\tB\n\tC");
    }

    #[test]
    fn indent_carries_across_write_boundary() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("A\n");
        out.write("B");
        assert_eq!(out.as_str(), "\tA\n\tB");
    }

    #[test]
    fn first_write_into_empty_buffer_is_indented() {
        let mut out = TemplateEmitter::new();
        out.push_indent("  ");
        out.write("A");
        assert_eq!(out.as_str(), "  A");
    }

    #[test]
    fn mixed_line_endings_each_break_once() {
        let mut out = TemplateEmitter::new();
        out.write("X");
        out.push_indent("  ");
        out.write("A\r\nB\rC\nD");
        assert_eq!(out.as_str(), "XA\r\n  B\r  C\n  D");
    }

    #[test]
    fn trailing_crlf_at_exact_end_is_not_double_indented() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("A\r\n");
        out.write("B");
        assert_eq!(out.as_str(), "\tA\r\n\tB");
    }

    #[test]
    fn trailing_lone_cr_defers_indent_to_next_write() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("A\r");
        out.write("B");
        assert_eq!(out.as_str(), "\tA\r\tB");
    }

    #[test]
    fn consecutive_breaks_each_reindent() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("A\n\nB");
        assert_eq!(out.as_str(), "\tA\n\t\n\tB");
    }

    #[test]
    fn crlf_pair_is_a_single_break() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("A\r\n\r\nB");
        assert_eq!(out.as_str(), "\tA\r\n\t\r\n\tB");
    }

    #[test]
    fn newline_only_write_under_indent() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("\n");
        out.write("B");
        assert_eq!(out.as_str(), "\t\n\tB");
    }

    #[test]
    fn multibyte_text_is_sliced_on_break_boundaries() {
        let mut out = TemplateEmitter::new();
        out.push_indent("→ ");
        out.write("héllo\nwörld");
        assert_eq!(out.as_str(), "→ héllo\n→ wörld");
    }

    #[test]
    fn write_line_appends_configured_newline() {
        let mut out = TemplateEmitter::new();
        out.write_line("hi");
        out.write("next");
        assert_eq!(out.as_str(), "hi\nnext");

        let mut out = TemplateEmitter::with_config(EmitConfig::with_newline(Newline::CrLf));
        out.write_line("hi");
        assert_eq!(out.as_str(), "hi\r\n");
    }

    #[test]
    fn write_line_forces_newline_flag() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write_line("A");
        out.write("B");
        assert_eq!(out.as_str(), "\tA\n\tB");
    }

    #[test]
    fn pop_on_empty_stack_is_a_silent_noop() {
        let mut out = TemplateEmitter::new();
        assert_eq!(out.pop_indent(), "");
        out.push_indent("  ");
        out.pop_indent();
        assert_eq!(out.pop_indent(), "");
        assert_eq!(out.current_indent(), "");
    }

    #[test]
    fn push_then_pop_restores_prior_prefix() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.push_indent("X");
        assert_eq!(out.current_indent(), "\tX");
        assert_eq!(out.pop_indent(), "X");
        assert_eq!(out.current_indent(), "\t");
    }

    #[test]
    fn clear_indent_drops_all_scopes() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.push_indent("  ");
        out.clear_indent();
        assert_eq!(out.current_indent(), "");
        assert_eq!(out.pop_indent(), "");
    }

    #[test]
    fn nested_scopes_compose_in_push_order() {
        let mut out = TemplateEmitter::new();
        out.push_indent("\t");
        out.write("outer\n");
        out.push_indent("  ");
        out.write("inner\n");
        out.pop_indent();
        out.write("outer again");
        assert_eq!(out.as_str(), "\touter\n\t  inner\n\touter again");
    }

    #[test]
    fn diagnostics_keep_order_and_severity() {
        let mut out = TemplateEmitter::new();
        out.write("text");
        out.error("x");
        out.warning("y");
        let diags = out.diagnostics();
        assert_eq!(diags.len(), 2);
        assert!(!diags[0].is_warning());
        assert_eq!(diags[0].message(), "x");
        assert!(diags[1].is_warning());
        assert_eq!(diags[1].message(), "y");
        // Side channel only: the buffer is untouched.
        assert_eq!(out.as_str(), "text");
        assert!(out.has_errors());
    }

    #[test]
    fn reset_clears_buffer_but_keeps_diagnostics() {
        let mut out = TemplateEmitter::new();
        out.write("stale");
        out.warning("kept");
        out.reset();
        assert!(out.is_empty());
        assert_eq!(out.diagnostics().len(), 1);
        out.push_indent("\t");
        out.write("A");
        assert_eq!(out.as_str(), "\tA");
    }

    #[test]
    fn output_drains_the_buffer() {
        let mut out = TemplateEmitter::with_capacity(64);
        out.write("done");
        let (text, diags) = out.into_parts();
        assert_eq!(text, "done");
        assert!(diags.is_empty());
    }
}
