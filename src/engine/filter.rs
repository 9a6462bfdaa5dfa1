// ============================================================================
// Numeric Filter
// Reduces arbitrary text to numerals and at most one decimal separator
// ============================================================================

use crate::domain::LocaleSettings;
use crate::numeric::is_numeral;
use unicode_segmentation::UnicodeSegmentation;

/// Keep only the numerals of `input`, plus the first decimal separator when
/// `allow_decimal_separator` is set.
///
/// Works on grapheme clusters and accepts decimal digits of any script, so
/// the result may contain non-ASCII digits: parse it with a
/// [`NumberFormatter`](crate::interfaces::NumberFormatter), not `str::parse`.
///
/// # Example
/// ```
/// use numeric_text::domain::LocaleSettings;
/// use numeric_text::engine::filter_numeric_text;
///
/// let locale = LocaleSettings::en_us();
/// assert_eq!(filter_numeric_text("1a2b", false, &locale), "12");
/// assert_eq!(filter_numeric_text("12.3.4", true, &locale), "12.34");
/// ```
pub fn filter_numeric_text(
    input: &str,
    allow_decimal_separator: bool,
    locale: &LocaleSettings,
) -> String {
    NumericFilter::new(allow_decimal_separator, locale.decimal_separator).apply(input)
}

/// A configured numeric filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericFilter {
    allow_decimal_separator: bool,
    decimal_separator: char,
}

impl NumericFilter {
    pub fn new(allow_decimal_separator: bool, decimal_separator: char) -> Self {
        Self {
            allow_decimal_separator,
            decimal_separator,
        }
    }

    /// Filter using the separator of `locale`
    pub fn for_locale(allow_decimal_separator: bool, locale: &LocaleSettings) -> Self {
        Self::new(allow_decimal_separator, locale.decimal_separator)
    }

    #[inline]
    pub fn allows_decimal_separator(&self) -> bool {
        self.allow_decimal_separator
    }

    #[inline]
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Filter `input`. Single pass, O(n).
    pub fn apply(&self, input: &str) -> String {
        let mut separator_consumed = false;
        let mut output = String::with_capacity(input.len());

        for grapheme in input.graphemes(true) {
            if is_numeral(grapheme) {
                output.push_str(grapheme);
            } else if self.allow_decimal_separator
                && !separator_consumed
                && self.is_separator(grapheme)
            {
                separator_consumed = true;
                output.push_str(grapheme);
            }
        }

        tracing::trace!(
            "Filtered {} bytes down to {} bytes",
            input.len(),
            output.len()
        );
        output
    }

    /// Whether `input` is already canonical, i.e. `apply` would not change it
    pub fn is_canonical(&self, input: &str) -> bool {
        let mut separator_consumed = false;

        input.graphemes(true).all(|grapheme| {
            if is_numeral(grapheme) {
                true
            } else if self.allow_decimal_separator
                && !separator_consumed
                && self.is_separator(grapheme)
            {
                separator_consumed = true;
                true
            } else {
                false
            }
        })
    }

    #[inline]
    fn is_separator(&self, grapheme: &str) -> bool {
        let mut chars = grapheme.chars();
        chars.next() == Some(self.decimal_separator) && chars.next().is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================
