// ============================================================================
// Decimal Formatter
// Locale-sensitive decimal style number formatter
// ============================================================================

use crate::domain::config::DEFAULT_FRACTION_DIGITS;
use crate::domain::{FieldConfig, LocaleSettings};
use crate::interfaces::NumberFormatter;
use crate::numeric::{digit_in_script, to_ascii_digit, FormatterError, FormatterResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Digits per grouping block
const GROUP_SIZE: usize = 3;

/// Default formatter: decimal style for a locale.
///
/// - Parsing tolerates grouping separators, any script's digits, a leading
///   minus sign and a leading or trailing decimal separator.
/// - Formatting rounds half to even, drops trailing zeros and omits grouping
///   unless enabled.
///
/// # Example
/// ```
/// use numeric_text::domain::LocaleSettings;
/// use numeric_text::engine::DecimalFormatter;
/// use numeric_text::interfaces::NumberFormatter;
/// use rust_decimal::Decimal;
///
/// let formatter = DecimalFormatter::new(LocaleSettings::de_de()).unwrap();
/// assert_eq!(formatter.parse("1.234,5"), Some(Decimal::new(12345, 1)));
/// assert_eq!(formatter.format(&Decimal::new(12345, 1)).unwrap(), "1234,5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormatter {
    locale: LocaleSettings,
    maximum_fraction_digits: u32,
    uses_grouping: bool,
}

impl DecimalFormatter {
    /// Create a formatter for `locale`.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the locale settings are ambiguous.
    pub fn new(locale: LocaleSettings) -> FormatterResult<Self> {
        locale.validate()?;
        Ok(Self {
            locale,
            maximum_fraction_digits: DEFAULT_FRACTION_DIGITS,
            uses_grouping: false,
        })
    }

    /// Create a formatter matching a field configuration
    pub fn from_config(config: &FieldConfig) -> FormatterResult<Self> {
        config.validate()?;
        Ok(Self::new(config.locale)?
            .with_maximum_fraction_digits(config.maximum_fraction_digits)
            .with_grouping(config.uses_grouping))
    }

    /// Builder method: Set maximum fraction digits
    pub fn with_maximum_fraction_digits(mut self, digits: u32) -> Self {
        self.maximum_fraction_digits = digits;
        self
    }

    /// Builder method: Enable grouping separators in output
    pub fn with_grouping(mut self, uses_grouping: bool) -> Self {
        self.uses_grouping = uses_grouping;
        self
    }

    pub fn locale(&self) -> &LocaleSettings {
        &self.locale
    }

    pub fn maximum_fraction_digits(&self) -> u32 {
        self.maximum_fraction_digits
    }

    pub fn uses_grouping(&self) -> bool {
        self.uses_grouping
    }

    /// Write ASCII digits into the output script, grouping if enabled
    fn push_digits(&self, out: &mut String, ascii: &str, grouped: bool) -> FormatterResult<()> {
        let len = ascii.len();
        for (i, c) in ascii.chars().enumerate() {
            if grouped && i > 0 && (len - i) % GROUP_SIZE == 0 {
                out.push(self.locale.grouping_separator);
            }
            let digit = c
                .to_digit(10)
                .and_then(|d| digit_in_script(self.locale.zero_digit, d))
                .ok_or_else(|| {
                    FormatterError::InvalidConfiguration(format!(
                        "cannot render digit {:?} with zero {:?}",
                        c, self.locale.zero_digit
                    ))
                })?;
            out.push(digit);
        }
        Ok(())
    }
}

/// Decimal style for the process locale
impl Default for DecimalFormatter {
    fn default() -> Self {
        Self {
            locale: LocaleSettings::current(),
            maximum_fraction_digits: DEFAULT_FRACTION_DIGITS,
            uses_grouping: false,
        }
    }
}

impl NumberFormatter for DecimalFormatter {
    fn parse(&self, text: &str) -> Option<Decimal> {
        let text = text.trim();

        let (is_negative, body) = match text.chars().next() {
            Some(c) if c == '-' || c == self.locale.minus_sign => (true, &text[c.len_utf8()..]),
            _ => (false, text),
        };

        let mut integer = String::with_capacity(body.len());
        let mut fraction = String::new();
        let mut seen_separator = false;

        for c in body.chars() {
            if let Some(digit) = to_ascii_digit(c) {
                if seen_separator {
                    fraction.push(digit);
                } else {
                    integer.push(digit);
                }
            } else if c == self.locale.decimal_separator && !seen_separator {
                seen_separator = true;
            } else if c == self.locale.grouping_separator && !seen_separator {
                continue;
            } else {
                return None;
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut canonical = if integer.is_empty() {
            "0".to_string()
        } else {
            integer
        };
        if !fraction.is_empty() {
            canonical.push('.');
            canonical.push_str(&fraction);
        }

        let value = Decimal::from_str(&canonical).ok()?;
        Some(if is_negative { -value } else { value })
    }

    fn format(&self, value: &Decimal) -> FormatterResult<String> {
        let rounded = value
            .round_dp_with_strategy(
                self.maximum_fraction_digits,
                RoundingStrategy::MidpointNearestEven,
            )
            .normalize();

        let ascii = rounded.abs().to_string();
        let (integer, fraction) = match ascii.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (ascii.as_str(), ""),
        };

        let mut out = String::with_capacity(ascii.len() + 4);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push(self.locale.minus_sign);
        }
        self.push_digits(&mut out, integer, self.uses_grouping)?;
        if !fraction.is_empty() {
            out.push(self.locale.decimal_separator);
            self.push_digits(&mut out, fraction, false)?;
        }

        Ok(out)
    }

    fn name(&self) -> &str {
        "decimal"
    }
}

// ============================================================================
// Tests
// ============================================================================
