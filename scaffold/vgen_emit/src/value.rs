//! Value formatting for template interpolation.
//!
//! Templates splice computed values into the output as plain strings. The
//! conversion runs over a small closed capability set, probed in order:
//!
//! 1. [`TemplateValue::invariant`] — culture-invariant conversion, for
//!    values whose text form must not drift with locale (numbers, flags);
//! 2. [`TemplateValue::styled`] — style-aware conversion, for values that
//!    accept a formatting context but have no invariant form;
//! 3. [`TemplateValue::plain`] — unconditional fallback.
//!
//! Handing the formatter an absent value is a contract violation on the
//! calling scaffolding logic and fails with [`EmitError::MissingValue`].

use crate::error::EmitError;

/// An explicit formatting context.
///
/// The default is the fixed culture-invariant style; individual calls may
/// override it through [`ValueFormatter::format_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatStyle {
    /// Separator between the integral and fractional part of a number.
    pub decimal_separator: char,
}

impl FormatStyle {
    /// The culture-invariant style: `.` as the decimal separator.
    pub const INVARIANT: FormatStyle = FormatStyle {
        decimal_separator: '.',
    };
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// String-conversion capabilities a template value may expose.
///
/// Implementors opt in to the tiers they support; the formatter walks the
/// chain top to bottom and stops at the first tier that produces text.
pub trait TemplateValue {
    /// Culture-invariant conversion. Values without an invariant text form
    /// return `None`.
    fn invariant(&self, style: &FormatStyle) -> Option<String> {
        let _ = style;
        None
    }

    /// Style-aware conversion for values that take a formatting context
    /// but have no invariant form. Returns `None` when unsupported.
    fn styled(&self, style: &FormatStyle) -> Option<String> {
        let _ = style;
        None
    }

    /// Default conversion, always available.
    fn plain(&self) -> String;
}

macro_rules! invariant_template_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TemplateValue for $ty {
                fn invariant(&self, _style: &FormatStyle) -> Option<String> {
                    Some(self.to_string())
                }

                fn plain(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

invariant_template_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char,
);

macro_rules! float_template_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TemplateValue for $ty {
                fn invariant(&self, style: &FormatStyle) -> Option<String> {
                    let text = self.to_string();
                    if style.decimal_separator == '.' {
                        Some(text)
                    } else {
                        Some(text.replace('.', &style.decimal_separator.to_string()))
                    }
                }

                fn plain(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

float_template_value!(f32, f64);

impl TemplateValue for str {
    fn plain(&self) -> String {
        self.to_owned()
    }
}

impl TemplateValue for String {
    fn plain(&self) -> String {
        self.clone()
    }
}

/// Formats template values with a default style.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueFormatter {
    style: FormatStyle,
}

impl ValueFormatter {
    /// Create a formatter with the invariant default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a specific default style.
    pub fn with_style(style: FormatStyle) -> Self {
        Self { style }
    }

    /// The formatter's default style.
    pub fn style(&self) -> &FormatStyle {
        &self.style
    }

    /// Format a value with the default style.
    ///
    /// An absent value is a caller contract violation.
    pub fn format<T: TemplateValue + ?Sized>(
        &self,
        value: Option<&T>,
    ) -> Result<String, EmitError> {
        self.format_with(value, &self.style)
    }

    /// Format a value with a per-call style override.
    pub fn format_with<T: TemplateValue + ?Sized>(
        &self,
        value: Option<&T>,
        style: &FormatStyle,
    ) -> Result<String, EmitError> {
        let value = value.ok_or(EmitError::MissingValue)?;
        if let Some(text) = value.invariant(style) {
            return Ok(text);
        }
        if let Some(text) = value.styled(style) {
            return Ok(text);
        }
        Ok(value.plain())
    }
}
