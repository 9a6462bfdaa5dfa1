// ============================================================================
// Number Formatter Interface
// Defines the contract for converting between numbers and localized text
// ============================================================================

use crate::numeric::FormatterResult;
use rust_decimal::Decimal;

/// Strategy interface for number formatting.
///
/// Implementations: `DecimalFormatter` (locale decimal style), or any
/// caller-supplied formatter pinned to a fixed locale for tests.
pub trait NumberFormatter {
    /// Parse localized text into a number.
    ///
    /// Returns `None` when the text is not a number (empty, lone separator,
    /// foreign characters). This is not an error.
    fn parse(&self, text: &str) -> Option<Decimal>;

    /// Render a number as localized text.
    ///
    /// # Errors
    /// Implementations may refuse a value; the error is handed to the caller
    /// untouched.
    fn format(&self, value: &Decimal) -> FormatterResult<String>;

    /// Get the formatter name for logging
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F: NumberFormatter + ?Sized> NumberFormatter for Box<F> {
    fn parse(&self, text: &str) -> Option<Decimal> {
        (**self).parse(text)
    }

    fn format(&self, value: &Decimal) -> FormatterResult<String> {
        (**self).format(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
