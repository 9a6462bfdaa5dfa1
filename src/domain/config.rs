// ============================================================================
// Field Configuration
// Per-field settings for numeric text input
// ============================================================================

use super::locale::LocaleSettings;
use crate::numeric::{FormatterError, FormatterResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest fraction digit count a `rust_decimal::Decimal` can hold
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Fraction digits kept by the default decimal style
pub const DEFAULT_FRACTION_DIGITS: u32 = 3;

/// Configuration for one numeric text field.
///
/// Fixed for the lifetime of a field: changing it means building a new
/// synchronizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Whether the user may type a decimal separator at all
    pub is_decimal_allowed: bool,

    /// Separators and digit script
    pub locale: LocaleSettings,

    /// Fraction digits kept when formatting a number into text
    pub maximum_fraction_digits: u32,

    /// Whether formatted text contains grouping separators
    /// Off by default so formatted text passes the filter unchanged
    pub uses_grouping: bool,
}

impl FieldConfig {
    /// Create a new configuration for the given locale
    pub fn new(is_decimal_allowed: bool, locale: LocaleSettings) -> Self {
        Self {
            is_decimal_allowed,
            locale,
            maximum_fraction_digits: if is_decimal_allowed {
                DEFAULT_FRACTION_DIGITS
            } else {
                0
            },
            uses_grouping: false,
        }
    }

    /// Whole numbers only, process locale
    pub fn integer() -> Self {
        Self::new(false, LocaleSettings::current())
    }

    /// Decimal numbers, process locale
    pub fn decimal() -> Self {
        Self::new(true, LocaleSettings::current())
    }

    /// Builder method: Set the locale
    pub fn with_locale(mut self, locale: LocaleSettings) -> Self {
        self.locale = locale;
        self
    }

    /// Builder method: Set maximum fraction digits
    pub fn with_maximum_fraction_digits(mut self, digits: u32) -> Self {
        self.maximum_fraction_digits = digits;
        self
    }

    /// Builder method: Enable grouping separators in formatted output
    pub fn with_grouping(mut self, uses_grouping: bool) -> Self {
        self.uses_grouping = uses_grouping;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> FormatterResult<()> {
        self.locale.validate()?;

        if self.maximum_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(FormatterError::InvalidConfiguration(format!(
                "maximum fraction digits cannot exceed {}",
                MAX_FRACTION_DIGITS
            )));
        }

        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::decimal()
    }
}
